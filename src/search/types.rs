use serde::Serialize;

use super::method::SimilarityMethod;
use crate::cache::CacheStats;
use crate::knowledge::ChunkRecord;

/// One ranked chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub document_id: u64,
    pub chunk_index: usize,
    pub content: String,
    pub filename: String,
    /// Score in `[0, 1]`.
    pub similarity_score: f64,
    pub similarity_method: SimilarityMethod,
}

impl SearchResult {
    pub fn from_chunk(chunk: &ChunkRecord, score: f64, method: SimilarityMethod) -> Self {
        Self {
            document_id: chunk.document_id,
            chunk_index: chunk.chunk_index,
            content: chunk.content.clone(),
            filename: chunk.filename.clone(),
            similarity_score: score,
            similarity_method: method,
        }
    }
}

/// Combined view of the caches used by retrieval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalCacheStats {
    pub vector_cache: CacheStats,
    pub search_cache: CacheStats,
    pub total_cached_items: usize,
    /// Mean of the two caches' hit rates.
    pub overall_hit_rate: f64,
}

impl RetrievalCacheStats {
    pub fn new(vector_cache: CacheStats, search_cache: CacheStats) -> Self {
        Self {
            total_cached_items: vector_cache.size + search_cache.size,
            overall_hit_rate: (vector_cache.hit_rate + search_cache.hit_rate) / 2.0,
            vector_cache,
            search_cache,
        }
    }
}

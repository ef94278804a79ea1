use std::sync::Arc;

use tracing::{debug, instrument};

use super::error::SearchError;
use super::method::SimilarityMethod;
use super::scoring::KeywordQuery;
use super::types::{RetrievalCacheStats, SearchResult};
use crate::cache::{CacheHandle, CacheRegistry, RegistryError};
use crate::constants::SEARCH_CACHE_NAME;
use crate::hashing::search_cache_key;
use crate::knowledge::{ChunkRecord, DocumentStore};
use crate::vectorize::{TextVectorizer, cosine_similarity};

/// Ranks stored chunks against a query, memoizing results per
/// `(query, top_k, method)`.
pub struct SearchEngine<S> {
    store: Arc<S>,
    vectorizer: TextVectorizer,
    cache: CacheHandle<Vec<SearchResult>>,
    method: SimilarityMethod,
}

impl<S> std::fmt::Debug for SearchEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("method", &self.method)
            .field("vectorizer", &self.vectorizer)
            .field("cache", &self.cache)
            .finish()
    }
}

impl<S: DocumentStore> SearchEngine<S> {
    /// Builds an engine on the registry's shared vector and search caches.
    pub fn new(
        store: Arc<S>,
        registry: &CacheRegistry,
        method: SimilarityMethod,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            store,
            vectorizer: TextVectorizer::new(registry)?,
            cache: registry.cache(SEARCH_CACHE_NAME)?,
            method,
        })
    }

    pub fn with_caches(
        store: Arc<S>,
        vectorizer: TextVectorizer,
        cache: CacheHandle<Vec<SearchResult>>,
        method: SimilarityMethod,
    ) -> Self {
        Self {
            store,
            vectorizer,
            cache,
            method,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn method(&self) -> SimilarityMethod {
        self.method
    }

    pub fn vectorizer(&self) -> &TextVectorizer {
        &self.vectorizer
    }

    pub fn search_cache(&self) -> &CacheHandle<Vec<SearchResult>> {
        &self.cache
    }

    /// Returns up to `top_k` chunks in non-increasing score order.
    ///
    /// A cached result for the same `(query, top_k, method)` is returned
    /// without reading the store or vectorizing anything.
    #[instrument(skip(self, query), fields(query_len = query.len(), method = %self.method))]
    pub async fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let key = search_cache_key(query, top_k, self.method.as_str());
        if let Some(results) = self.cache.get(&key) {
            debug!(results = results.len(), "search cache hit");
            return Ok(results);
        }

        let chunks = self.store.list_chunks().await?;
        let mut results = self.rank(query, &chunks);
        results.truncate(top_k);

        self.cache.put(key, results.clone());
        debug!(
            candidates = chunks.len(),
            results = results.len(),
            "search results cached"
        );
        Ok(results)
    }

    /// Scores every chunk, drops those at or below the method's inclusion
    /// threshold and sorts the rest by descending score. Ties keep storage
    /// order.
    pub fn rank(&self, query: &str, chunks: &[ChunkRecord]) -> Vec<SearchResult> {
        let threshold = self.method.inclusion_threshold();
        let mut results: Vec<SearchResult> = match self.method {
            SimilarityMethod::Cosine => {
                let query_vector = self.vectorizer.vectorize(query);
                chunks
                    .iter()
                    .filter_map(|chunk| {
                        let chunk_vector = self.vectorizer.vectorize(&chunk.content);
                        let score = cosine_similarity(&query_vector, &chunk_vector);
                        (score > threshold)
                            .then(|| SearchResult::from_chunk(chunk, score, self.method))
                    })
                    .collect()
            }
            SimilarityMethod::Keyword => {
                let prepared = KeywordQuery::new(query);
                chunks
                    .iter()
                    .filter_map(|chunk| {
                        let score = prepared.raw_score(chunk);
                        (score > threshold)
                            .then(|| SearchResult::from_chunk(chunk, score.min(1.0), self.method))
                    })
                    .collect()
            }
        };

        results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        results
    }

    pub fn cache_stats(&self) -> RetrievalCacheStats {
        RetrievalCacheStats::new(
            self.vectorizer.cache().get_stats(),
            self.cache.get_stats(),
        )
    }

    /// Clears the vector and search caches.
    pub fn clear_caches(&self) {
        self.vectorizer.cache().clear();
        self.cache.clear();
        debug!("retrieval caches cleared");
    }

    /// Sweeps expired entries from the vector and search caches.
    pub fn cleanup_expired_caches(&self) -> usize {
        self.vectorizer.cache().cleanup_expired() + self.cache.cleanup_expired()
    }
}

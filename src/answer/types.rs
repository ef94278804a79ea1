use serde::Serialize;

use crate::cache::CacheStats;
use crate::search::{RetrievalCacheStats, SearchResult};

/// Where an answer's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Grounded in retrieved chunks.
    KnowledgeBase,
    /// Unconstrained completion.
    General,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::KnowledgeBase => "knowledge_base",
            AnswerSource::General => "general",
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub question: String,
    pub answer_text: String,
    pub source: AnswerSource,
    /// Chunks the answer was grounded in; empty for general answers.
    pub relevant_docs: Vec<SearchResult>,
    /// Top chunk score when grounded, a fixed value for general answers,
    /// `0.0` when the completion failed.
    pub confidence: f64,
    /// Set when every completion attempt failed and `answer_text` is a
    /// failure message.
    pub completion_failed: bool,
}

impl Answer {
    pub fn is_grounded(&self) -> bool {
        self.source == AnswerSource::KnowledgeBase
    }
}

/// Retrieval caches plus the API-answer cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerCacheStats {
    pub knowledge_base: RetrievalCacheStats,
    pub api_cache: CacheStats,
    pub total_cached_items: usize,
    /// Mean of the retrieval hit rate and the API-cache hit rate.
    pub overall_hit_rate: f64,
}

impl AnswerCacheStats {
    pub fn new(knowledge_base: RetrievalCacheStats, api_cache: CacheStats) -> Self {
        Self {
            total_cached_items: knowledge_base.total_cached_items + api_cache.size,
            overall_hit_rate: (knowledge_base.overall_hit_rate + api_cache.hit_rate) / 2.0,
            knowledge_base,
            api_cache,
        }
    }
}

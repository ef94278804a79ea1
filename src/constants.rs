//! Cross-cutting, shared constants.
//!
//! The scoring weights and thresholds below are empirically tuned. Their exact
//! values decide ranking order, so treat them as a fixed contract.

/// Registry name of the term-vector cache.
pub const VECTOR_CACHE_NAME: &str = "vector_cache";
/// Registry name of the search-result cache.
pub const SEARCH_CACHE_NAME: &str = "search_cache";
/// Registry name of the completion-answer cache.
pub const API_CACHE_NAME: &str = "api_cache";

pub const DEFAULT_CACHE_SIZE: usize = 100;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

pub const VECTOR_CACHE_SIZE: usize = 200;
pub const VECTOR_CACHE_TTL_SECS: u64 = 7200;

pub const SEARCH_CACHE_SIZE: usize = 100;
pub const SEARCH_CACHE_TTL_SECS: u64 = 1800;

pub const API_CACHE_SIZE: usize = 50;
pub const API_CACHE_TTL_SECS: u64 = 3600;

/// Minimum cosine similarity for a chunk to be kept.
pub const COSINE_INCLUSION_THRESHOLD: f64 = 0.05;
/// Minimum keyword score for a chunk to be kept.
pub const KEYWORD_INCLUSION_THRESHOLD: f64 = 0.1;

/// Best-chunk score below which cosine retrieval is not used for grounding.
pub const COSINE_GROUNDING_THRESHOLD: f64 = 0.1;
/// Best-chunk score below which keyword retrieval is not used for grounding.
pub const KEYWORD_GROUNDING_THRESHOLD: f64 = 0.3;

pub const KEYWORD_SUBSTRING_BASE: f64 = 0.6;
pub const KEYWORD_SUBSTRING_COVERAGE_WEIGHT: f64 = 0.2;
pub const KEYWORD_OVERLAP_WEIGHT: f64 = 0.3;
pub const KEYWORD_WORD_OVERLAP_WEIGHT: f64 = 0.1;
pub const KEYWORD_SHORT_CHUNK_PENALTY: f64 = 0.8;
/// Chunks shorter than this many characters get the short-chunk penalty.
pub const KEYWORD_SHORT_CHUNK_CHARS: usize = 50;

/// Number of chunks retrieved to ground an answer.
pub const GROUNDING_TOP_K: usize = 3;
/// Confidence reported for ungrounded answers.
pub const GENERAL_ANSWER_CONFIDENCE: f64 = 0.8;

pub const DEFAULT_CHUNK_SIZE: usize = 500;
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 2;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 3000;

pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

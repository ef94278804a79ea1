//! Similarity search over stored chunks.
//!
//! [`SearchEngine`] scores every chunk with the [`SimilarityMethod`] it was
//! built with, keeps those above the method's inclusion threshold, and caches
//! the ranked top-k per `(query, top_k, method)`.

pub mod engine;
pub mod error;
pub mod method;
pub mod scoring;
pub mod types;


pub use engine::SearchEngine;
pub use error::{SearchError, UnknownMethodError};
pub use method::SimilarityMethod;
pub use scoring::KeywordQuery;
pub use types::{RetrievalCacheStats, SearchResult};

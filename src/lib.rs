//! Harvest library crate: bounded caching and cached retrieval for a farm
//! knowledge assistant.
//!
//! # Public API Surface
//!
//! ## Caching
//! - [`BoundedCache`], [`CacheHandle`] - thread-safe LRU cache with optional TTL
//! - [`CacheRegistry`], [`RegistryConfig`] - one shared cache instance per name
//! - [`CacheSweeper`] - periodic expired-entry cleanup
//!
//! ## Retrieval
//! - [`TextVectorizer`], [`TermVector`], [`cosine_similarity`] - term-frequency vectors
//! - [`SearchEngine`], [`SimilarityMethod`] - ranked, memoized chunk search
//! - [`DocumentStore`], [`InMemoryDocumentStore`] - chunk storage and ingestion
//!
//! ## Answering
//! - [`AnswerOrchestrator`], [`Answer`] - grounded or general answers
//! - [`CompletionService`], [`ChatCompletionClient`], [`RetryPolicy`] - completion backend
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `HARVEST_*` environment configuration
//!
//! ## Test/Mock Support
//! [`MockCompletionService`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod answer;
pub mod cache;
pub mod completion;
pub mod config;
pub mod constants;
pub mod hashing;
pub mod knowledge;
pub mod maintenance;
pub mod search;
pub mod vectorize;

pub use answer::{Answer, AnswerCacheStats, AnswerOrchestrator, AnswerSource};
pub use cache::{
    BoundedCache, CacheConfig, CacheHandle, CacheMaintenance, CacheRegistry, CacheStats,
    RegistryConfig, RegistryError,
};
#[cfg(any(test, feature = "mock"))]
pub use completion::MockCompletionService;
pub use completion::{
    ChatClientConfig, ChatCompletionClient, CompletionError, CompletionService, RetryPolicy,
};
pub use config::{Config, ConfigError};
pub use hashing::{content_hash, prompt_cache_key, search_cache_key, vector_cache_key};
pub use knowledge::{
    ChunkRecord, ChunkingConfig, Document, DocumentStore, InMemoryDocumentStore,
    KnowledgeBaseStats, StoreError, UploadReceipt,
};
pub use maintenance::CacheSweeper;
pub use search::{
    RetrievalCacheStats, SearchEngine, SearchError, SearchResult, SimilarityMethod,
    UnknownMethodError,
};
pub use vectorize::{TermVector, TextVectorizer, cosine_similarity};

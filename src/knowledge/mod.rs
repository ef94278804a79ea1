//! Knowledge base: documents, chunks and the store that holds them.
//!
//! The search engine only needs [`DocumentStore`]. [`InMemoryDocumentStore`]
//! implements it and adds the ingestion side (upload with deduplication,
//! chunking, keyword annotation, deletion and stats).

pub mod chunking;
pub mod error;
pub mod keywords;
pub mod model;
pub mod store;

#[cfg(test)]
mod tests;

pub use chunking::{ChunkingConfig, chunk_text};
pub use error::StoreError;
pub use keywords::{AGRICULTURAL_KEYWORDS, extract_keywords, is_in_domain};
pub use model::{
    ChunkRecord, Document, DocumentChunk, DocumentSummary, KnowledgeBaseStats, UploadReceipt,
};
pub use store::{DocumentStore, InMemoryDocumentStore};

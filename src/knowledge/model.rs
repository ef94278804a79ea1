use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored source document.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: u64,
    pub filename: String,
    pub content: String,
    /// Lower-cased extension including the dot (`".txt"`), empty if none.
    pub file_type: String,
    /// BLAKE3 hex digest of the raw upload, used for deduplication.
    pub content_hash: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub processed: bool,
}

/// One chunk of a [`Document`].
#[derive(Debug, Clone, Serialize)]
pub struct DocumentChunk {
    pub document_id: u64,
    pub chunk_index: usize,
    pub content: String,
    pub keywords: Vec<String>,
}

/// A chunk joined with its parent document's filename, as enumerated for scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkRecord {
    pub document_id: u64,
    pub chunk_index: usize,
    pub content: String,
    pub keywords: Vec<String>,
    pub filename: String,
}

/// Listing view of a document without its content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub id: u64,
    pub filename: String,
    pub file_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub processed: bool,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            filename: doc.filename.clone(),
            file_type: doc.file_type.clone(),
            size_bytes: doc.size_bytes,
            uploaded_at: doc.uploaded_at,
            processed: doc.processed,
        }
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    pub document_id: u64,
    pub chunk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeBaseStats {
    pub total_documents: usize,
    pub total_chunks: usize,
    pub file_types: BTreeMap<String, usize>,
    /// Total upload size in MiB, rounded to two decimals.
    pub total_size_mb: f64,
}

//! Document Store collaborator and its in-memory implementation.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{info, warn};

use super::chunking::{ChunkingConfig, chunk_text};
use super::error::StoreError;
use super::keywords::extract_keywords;
use super::model::{
    ChunkRecord, Document, DocumentChunk, DocumentSummary, KnowledgeBaseStats, UploadReceipt,
};
use crate::hashing::content_hash;

/// Read access to stored chunks, as consumed by the search engine.
pub trait DocumentStore: Send + Sync {
    /// Every chunk with its parent document's id and filename, in storage order.
    fn list_chunks(&self) -> impl Future<Output = Result<Vec<ChunkRecord>, StoreError>> + Send;

    /// Number of stored documents.
    fn document_count(&self) -> impl Future<Output = Result<usize, StoreError>> + Send;
}

#[derive(Default)]
struct StoreState {
    documents: BTreeMap<u64, Document>,
    chunks: Vec<DocumentChunk>,
    next_id: u64,
}

/// Thread-safe in-memory document store.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    chunking: ChunkingConfig,
    state: RwLock<StoreState>,
}

impl InMemoryDocumentStore {
    pub fn new(chunking: ChunkingConfig) -> Self {
        Self {
            chunking,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Stores a document, splitting it into keyword-annotated chunks.
    ///
    /// Bytes are decoded as UTF-8, replacing invalid sequences. Identical
    /// uploads (by content hash) are rejected.
    pub fn upload(&self, bytes: &[u8], filename: &str) -> Result<UploadReceipt, StoreError> {
        let hash = content_hash(bytes);

        if let Some(existing) = self
            .state
            .read()
            .documents
            .values()
            .find(|doc| doc.content_hash == hash)
        {
            warn!(filename, existing_id = existing.id, "skipping duplicate upload");
            return Err(StoreError::Duplicate {
                filename: filename.to_string(),
                existing_id: existing.id,
            });
        }

        let content = String::from_utf8_lossy(bytes).into_owned();
        if content.trim().is_empty() {
            return Err(StoreError::EmptyContent {
                filename: filename.to_string(),
            });
        }

        let pieces = chunk_text(&content, self.chunking);
        if pieces.is_empty() {
            return Err(StoreError::NoChunks {
                filename: filename.to_string(),
            });
        }

        let mut state = self.state.write();
        // Re-check under the write lock; a concurrent upload may have won.
        if let Some(existing) = state.documents.values().find(|doc| doc.content_hash == hash) {
            return Err(StoreError::Duplicate {
                filename: filename.to_string(),
                existing_id: existing.id,
            });
        }

        state.next_id += 1;
        let document_id = state.next_id;
        let chunk_count = pieces.len();

        state
            .chunks
            .extend(pieces.into_iter().enumerate().map(|(chunk_index, content)| {
                let keywords = extract_keywords(&content)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                DocumentChunk {
                    document_id,
                    chunk_index,
                    content,
                    keywords,
                }
            }));

        state.documents.insert(
            document_id,
            Document {
                id: document_id,
                filename: filename.to_string(),
                content,
                file_type: file_type_of(filename),
                content_hash: hash,
                size_bytes: bytes.len() as u64,
                uploaded_at: Utc::now(),
                processed: true,
            },
        );

        info!(filename, document_id, chunk_count, "document uploaded");
        Ok(UploadReceipt {
            document_id,
            chunk_count,
        })
    }

    /// Removes a document and all of its chunks.
    pub fn delete(&self, id: u64) -> Result<Document, StoreError> {
        let mut state = self.state.write();
        let document = state
            .documents
            .remove(&id)
            .ok_or(StoreError::NotFound { id })?;
        state.chunks.retain(|chunk| chunk.document_id != id);

        info!(filename = %document.filename, document_id = id, "document deleted");
        Ok(document)
    }

    pub fn get(&self, id: u64) -> Option<Document> {
        self.state.read().documents.get(&id).cloned()
    }

    /// Document listing, newest first.
    pub fn documents(&self) -> Vec<DocumentSummary> {
        let state = self.state.read();
        let mut summaries: Vec<DocumentSummary> =
            state.documents.values().map(DocumentSummary::from).collect();
        summaries.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at).then(b.id.cmp(&a.id)));
        summaries
    }

    pub fn stats(&self) -> KnowledgeBaseStats {
        let state = self.state.read();

        let mut file_types = BTreeMap::new();
        for doc in state.documents.values() {
            *file_types.entry(doc.file_type.clone()).or_insert(0usize) += 1;
        }
        let total_bytes: u64 = state.documents.values().map(|doc| doc.size_bytes).sum();
        let total_size_mb = (total_bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0;

        KnowledgeBaseStats {
            total_documents: state.documents.len(),
            total_chunks: state.chunks.len(),
            file_types,
            total_size_mb,
        }
    }

    pub fn len(&self) -> usize {
        self.state.read().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().documents.is_empty()
    }

    fn chunk_records(&self) -> Vec<ChunkRecord> {
        let state = self.state.read();
        state
            .chunks
            .iter()
            .filter_map(|chunk| {
                let doc = state.documents.get(&chunk.document_id)?;
                Some(ChunkRecord {
                    document_id: chunk.document_id,
                    chunk_index: chunk.chunk_index,
                    content: chunk.content.clone(),
                    keywords: chunk.keywords.clone(),
                    filename: doc.filename.clone(),
                })
            })
            .collect()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    async fn list_chunks(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        Ok(self.chunk_records())
    }

    async fn document_count(&self) -> Result<usize, StoreError> {
        Ok(self.len())
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("InMemoryDocumentStore")
            .field("documents", &state.documents.len())
            .field("chunks", &state.chunks.len())
            .field("chunking", &self.chunking)
            .finish()
    }
}

fn file_type_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

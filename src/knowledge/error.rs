use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("document '{filename}' already exists (id {existing_id})")]
    Duplicate { filename: String, existing_id: u64 },

    #[error("document '{filename}' has no readable content")]
    EmptyContent { filename: String },

    #[error("document '{filename}' produced no chunks")]
    NoChunks { filename: String },

    #[error("document {id} not found")]
    NotFound { id: u64 },

    /// The backing store could not be reached.
    #[error("document store unavailable: {reason}")]
    Unavailable { reason: String },
}

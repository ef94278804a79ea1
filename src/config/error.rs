//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Similarity method is neither `cosine` nor `keyword`.
    #[error("unknown similarity method '{value}': expected 'cosine' or 'keyword'")]
    UnknownSimilarityMethod { value: String },

    /// A cache was configured to hold no entries.
    #[error("cache '{name}' must hold at least one entry")]
    ZeroCapacity { name: &'static str },

    /// Chunk size is zero or not larger than the overlap.
    #[error("invalid chunking: chunk_size {chunk_size} must exceed overlap {overlap}")]
    InvalidChunking { chunk_size: usize, overlap: usize },

    /// A duration setting was zero where a positive value is required.
    #[error("'{name}' must be greater than zero")]
    ZeroDuration { name: &'static str },

    /// A required environment variable was not set.
    #[error("missing required environment variable: {name}")]
    MissingEnvVar { name: &'static str },
}

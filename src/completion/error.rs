use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by a completion service.
pub enum CompletionError {
    /// The request did not finish in time.
    #[error("completion request timed out after {timeout_ms} ms")]
    Timeout {
        /// Elapsed budget in milliseconds.
        timeout_ms: u64,
    },

    /// The endpoint could not be reached.
    #[error("failed to reach completion endpoint '{url}': {message}")]
    Connection {
        /// Endpoint URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// Non-success HTTP status.
    #[error("completion endpoint returned HTTP {status}: {body}")]
    Http {
        /// Status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response could not be decoded or had no content.
    #[error("invalid completion response: {reason}")]
    InvalidResponse {
        /// What was wrong with it.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build completion client: {message}")]
    ClientBuild {
        /// Error message.
        message: String,
    },
}

impl CompletionError {
    /// Timeouts and connection failures are worth retrying; everything else is final.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            CompletionError::Timeout { .. } | CompletionError::Connection { .. }
        )
    }
}

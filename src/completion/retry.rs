//! Bounded fixed-delay retry for completion requests.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use super::error::CompletionError;
use crate::constants::{DEFAULT_RETRY_DELAY_MS, DEFAULT_RETRY_MAX_ATTEMPTS};

/// How often and how patiently a failed completion is retried.
///
/// Only [transient](CompletionError::is_transient) errors are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. Zero behaves like one.
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
            delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Single attempt, no retry.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }

    /// Runs `f` until it succeeds, fails permanently, or attempts run out.
    /// Returns the last error in the latter two cases.
    pub async fn run<F, Fut, T>(&self, operation: &str, mut f: F) -> Result<T, CompletionError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, CompletionError>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < attempts => {
                    warn!(
                        operation,
                        attempt,
                        max_attempts = attempts,
                        delay_ms = self.delay.as_millis() as u64,
                        error = %err,
                        "transient completion failure, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

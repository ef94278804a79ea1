//! Completion service seam.
//!
//! [`CompletionService`] is what the answer orchestrator calls.
//! [`ChatCompletionClient`] talks to an OpenAI-compatible HTTP endpoint and
//! [`RetryPolicy`] bounds how often a transient failure is retried.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod retry;
pub mod service;


pub use client::{ChatClientConfig, ChatCompletionClient};
pub use error::CompletionError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockCompletionService;
pub use retry::RetryPolicy;
pub use service::CompletionService;

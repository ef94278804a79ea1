use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use super::error::CompletionError;
use super::service::CompletionService;

/// Scripted completion service for tests.
///
/// Replies are consumed in order; once the script is empty every call
/// answers `"mock answer #<call number>"`.
#[derive(Default)]
pub struct MockCompletionService {
    script: Mutex<VecDeque<Result<String, CompletionError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps for `latency` before answering each call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.script.lock().push_back(Ok(reply.into()));
    }

    pub fn push_failure(&self, err: CompletionError) {
        self.script.lock().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().last().cloned()
    }
}

impl CompletionService for MockCompletionService {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts.lock().push(prompt.to_string());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let scripted = self.script.lock().pop_front();
        scripted.unwrap_or_else(|| Ok(format!("mock answer #{call}")))
    }
}

use std::future::Future;
use std::sync::Arc;

use super::error::CompletionError;

/// Sends a prompt to a text-generation backend and returns the generated text.
pub trait CompletionService: Send + Sync {
    fn complete(&self, prompt: &str)
    -> impl Future<Output = Result<String, CompletionError>> + Send;
}

impl<C: CompletionService> CompletionService for Arc<C> {
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send {
        (**self).complete(prompt)
    }
}

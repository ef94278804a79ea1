use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::prompt::{build_general_prompt, build_grounded_prompt};
use super::types::{Answer, AnswerCacheStats, AnswerSource};
use crate::cache::{CacheHandle, CacheRegistry, RegistryError};
use crate::completion::{CompletionError, CompletionService, RetryPolicy};
use crate::constants::{
    API_CACHE_NAME, DEFAULT_COMPLETION_TIMEOUT_SECS, GENERAL_ANSWER_CONFIDENCE, GROUNDING_TOP_K,
};
use crate::hashing::prompt_cache_key;
use crate::knowledge::{DocumentStore, is_in_domain};
use crate::search::{SearchEngine, SearchResult};

/// Answers questions, grounding them in retrieved chunks when the knowledge
/// base has relevant in-domain content.
///
/// Completion responses are memoized by a hash of the exact prompt. Only
/// successful responses are cached, so a failed or cancelled call never
/// leaves anything behind.
pub struct AnswerOrchestrator<S, C> {
    engine: SearchEngine<S>,
    completion: C,
    api_cache: CacheHandle<String>,
    retry: RetryPolicy,
    timeout: Duration,
}

impl<S, C> std::fmt::Debug for AnswerOrchestrator<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerOrchestrator")
            .field("engine", &self.engine)
            .field("api_cache", &self.api_cache)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl<S: DocumentStore, C: CompletionService> AnswerOrchestrator<S, C> {
    /// Uses the registry's shared API-answer cache, the default retry
    /// policy and the default per-attempt timeout.
    pub fn new(
        engine: SearchEngine<S>,
        completion: C,
        registry: &CacheRegistry,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            engine,
            completion,
            api_cache: registry.cache(API_CACHE_NAME)?,
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Bounds each completion attempt.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn engine(&self) -> &SearchEngine<S> {
        &self.engine
    }

    pub fn completion(&self) -> &C {
        &self.completion
    }

    pub fn api_cache(&self) -> &CacheHandle<String> {
        &self.api_cache
    }

    /// Answers `question`. Never fails: retrieval problems fall back to a
    /// general answer and completion failures produce an answer with
    /// `completion_failed` set.
    #[instrument(skip(self, question), fields(question_len = question.len()))]
    pub async fn answer(&self, question: &str, use_grounding: bool) -> Answer {
        let grounding = if use_grounding {
            self.grounding_for(question).await
        } else {
            debug!("grounding disabled by caller");
            None
        };

        let (prompt, source, relevant_docs, confidence) = match grounding {
            Some(docs) => {
                let confidence = docs.first().map_or(0.0, |top| top.similarity_score);
                (
                    build_grounded_prompt(question, &docs),
                    AnswerSource::KnowledgeBase,
                    docs,
                    confidence,
                )
            }
            None => (
                build_general_prompt(question),
                AnswerSource::General,
                Vec::new(),
                GENERAL_ANSWER_CONFIDENCE,
            ),
        };

        match self.complete_cached(&prompt).await {
            Ok(answer_text) => {
                info!(source = %source, confidence, "question answered");
                Answer {
                    question: question.to_string(),
                    answer_text,
                    source,
                    relevant_docs,
                    confidence,
                    completion_failed: false,
                }
            }
            Err(err) => {
                warn!(source = %source, error = %err, "completion failed");
                Answer {
                    question: question.to_string(),
                    answer_text: self.failure_message(&err),
                    source,
                    relevant_docs,
                    confidence: 0.0,
                    completion_failed: true,
                }
            }
        }
    }

    /// Retrieved chunks to ground `question` in, or `None` when a general
    /// answer should be given instead.
    async fn grounding_for(&self, question: &str) -> Option<Vec<SearchResult>> {
        match self.engine.store().document_count().await {
            Ok(0) => {
                debug!("knowledge base empty");
                return None;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "document count unavailable, answering without grounding");
                return None;
            }
        }

        let docs = match self.engine.search(question, GROUNDING_TOP_K).await {
            Ok(docs) => docs,
            Err(err) => {
                warn!(error = %err, "retrieval failed, answering without grounding");
                return None;
            }
        };

        let threshold = self.engine.method().grounding_threshold();
        let top_score = docs.first().map(|top| top.similarity_score);
        if !top_score.is_some_and(|score| score >= threshold) {
            debug!(?top_score, threshold, "no sufficiently similar chunks");
            return None;
        }

        if !is_in_domain(question) {
            debug!("question has no domain keywords");
            return None;
        }

        Some(docs)
    }

    async fn complete_cached(&self, prompt: &str) -> Result<String, CompletionError> {
        let key = prompt_cache_key(prompt);
        if let Some(text) = self.api_cache.get(&key) {
            debug!(prompt_len = prompt.len(), "api cache hit");
            return Ok(text);
        }

        let timeout = self.timeout;
        let text = self
            .retry
            .run("complete", || async move {
                match tokio::time::timeout(timeout, self.completion.complete(prompt)).await {
                    Ok(result) => result,
                    Err(_) => Err(CompletionError::Timeout {
                        timeout_ms: timeout.as_millis() as u64,
                    }),
                }
            })
            .await?;

        self.api_cache.put(key, text.clone());
        debug!(prompt_len = prompt.len(), answer_len = text.len(), "api answer cached");
        Ok(text)
    }

    fn failure_message(&self, err: &CompletionError) -> String {
        if err.is_transient() {
            format!(
                "API调用失败，已重试{}次: {}",
                self.retry.max_attempts.max(1),
                err
            )
        } else {
            format!("调用失败: {err}")
        }
    }

    pub fn cache_stats(&self) -> AnswerCacheStats {
        AnswerCacheStats::new(self.engine.cache_stats(), self.api_cache.get_stats())
    }

    /// Clears the vector, search and API-answer caches.
    pub fn clear_all_caches(&self) {
        self.engine.clear_caches();
        self.api_cache.clear();
        info!("all answer caches cleared");
    }

    /// Sweeps expired entries from the vector, search and API-answer caches.
    pub fn cleanup_expired_caches(&self) -> usize {
        let removed = self.engine.cleanup_expired_caches() + self.api_cache.cleanup_expired();
        if removed > 0 {
            info!(removed, "expired cache entries removed");
        }
        removed
    }
}

//! HTTP client for OpenAI-compatible `/chat/completions` endpoints.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::CompletionError;
use super::service::CompletionService;
use crate::constants::DEFAULT_COMPLETION_TIMEOUT_SECS;

pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";
pub const DEFAULT_MODEL: &str = "Qwen/Qwen2.5-72B-Instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Clone, PartialEq)]
pub struct ChatClientConfig {
    pub base_url: String,
    pub model: String,
    /// Sent as a bearer token when present.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl std::fmt::Debug for ChatClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClientConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ChatClientConfig {
    /// `{base_url}/chat/completions`, tolerating a trailing slash.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Sends each prompt as a single user message.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    http: reqwest::Client,
    config: ChatClientConfig,
    endpoint: String,
}

impl ChatCompletionClient {
    pub fn new(config: ChatClientConfig) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            config,
        })
    }

    pub fn config(&self) -> &ChatClientConfig {
        &self.config
    }

    fn map_send_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            CompletionError::Connection {
                url: self.endpoint.clone(),
                message: err.to_string(),
            }
        }
    }
}

impl CompletionService for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| CompletionError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::InvalidResponse {
                reason: "response contained no choices".to_string(),
            })?;

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            answer_len = content.len(),
            "completion received"
        );
        Ok(content)
    }
}

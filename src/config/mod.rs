//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `HARVEST_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::cache::{CacheConfig, RegistryConfig};
use crate::completion::{ChatClientConfig, RetryPolicy};
use crate::completion::client::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::constants::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_COMPLETION_TIMEOUT_SECS,
    DEFAULT_RETRY_DELAY_MS, DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_SWEEP_INTERVAL_SECS,
};
use crate::knowledge::ChunkingConfig;
use crate::search::{SimilarityMethod, UnknownMethodError};

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `HARVEST_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scoring strategy for retrieval. Default: cosine.
    pub similarity_method: SimilarityMethod,

    /// Size and TTL of the vector, search, API and fallback caches.
    pub caches: RegistryConfig,

    /// OpenAI-compatible API root. Default: [`DEFAULT_BASE_URL`].
    pub completion_base_url: String,

    /// Model identifier sent with every completion request.
    pub completion_model: String,

    /// Bearer token for the completion endpoint.
    pub completion_api_key: Option<String>,

    /// Per-attempt completion timeout. Default: 60 s.
    pub completion_timeout: Duration,

    /// Completion attempts including the first. Default: `2`.
    pub retry_max_attempts: u32,

    /// Pause between completion attempts. Default: 3 s.
    pub retry_delay: Duration,

    /// Maximum chunk length in characters. Default: `500`.
    pub chunk_size: usize,

    /// Characters carried over between chunks. Default: `50`.
    pub chunk_overlap: usize,

    /// Period of the expired-entry sweeper. Default: 300 s.
    pub sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_method: SimilarityMethod::default(),
            caches: RegistryConfig::default(),
            completion_base_url: DEFAULT_BASE_URL.to_string(),
            completion_model: DEFAULT_MODEL.to_string(),
            completion_api_key: None,
            completion_timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
            retry_max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

impl Config {
    const ENV_SIMILARITY_METHOD: &'static str = "HARVEST_SIMILARITY_METHOD";
    const ENV_VECTOR_CACHE_SIZE: &'static str = "HARVEST_VECTOR_CACHE_SIZE";
    const ENV_VECTOR_CACHE_TTL: &'static str = "HARVEST_VECTOR_CACHE_TTL_SECS";
    const ENV_SEARCH_CACHE_SIZE: &'static str = "HARVEST_SEARCH_CACHE_SIZE";
    const ENV_SEARCH_CACHE_TTL: &'static str = "HARVEST_SEARCH_CACHE_TTL_SECS";
    const ENV_API_CACHE_SIZE: &'static str = "HARVEST_API_CACHE_SIZE";
    const ENV_API_CACHE_TTL: &'static str = "HARVEST_API_CACHE_TTL_SECS";
    const ENV_DEFAULT_CACHE_SIZE: &'static str = "HARVEST_DEFAULT_CACHE_SIZE";
    const ENV_DEFAULT_CACHE_TTL: &'static str = "HARVEST_DEFAULT_CACHE_TTL_SECS";
    const ENV_COMPLETION_BASE_URL: &'static str = "HARVEST_COMPLETION_BASE_URL";
    const ENV_COMPLETION_MODEL: &'static str = "HARVEST_COMPLETION_MODEL";
    const ENV_COMPLETION_API_KEY: &'static str = "HARVEST_COMPLETION_API_KEY";
    const ENV_COMPLETION_TIMEOUT: &'static str = "HARVEST_COMPLETION_TIMEOUT_SECS";
    const ENV_RETRY_MAX_ATTEMPTS: &'static str = "HARVEST_RETRY_MAX_ATTEMPTS";
    const ENV_RETRY_DELAY: &'static str = "HARVEST_RETRY_DELAY_MS";
    const ENV_CHUNK_SIZE: &'static str = "HARVEST_CHUNK_SIZE";
    const ENV_CHUNK_OVERLAP: &'static str = "HARVEST_CHUNK_OVERLAP";
    const ENV_SWEEP_INTERVAL: &'static str = "HARVEST_SWEEP_INTERVAL_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Unparseable numbers fall back to their default; an unknown similarity
    /// method is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let similarity_method = Self::parse_method_from_env(defaults.similarity_method)?;
        let caches = RegistryConfig {
            vector: Self::parse_cache_from_env(
                Self::ENV_VECTOR_CACHE_SIZE,
                Self::ENV_VECTOR_CACHE_TTL,
                defaults.caches.vector,
            ),
            search: Self::parse_cache_from_env(
                Self::ENV_SEARCH_CACHE_SIZE,
                Self::ENV_SEARCH_CACHE_TTL,
                defaults.caches.search,
            ),
            api: Self::parse_cache_from_env(
                Self::ENV_API_CACHE_SIZE,
                Self::ENV_API_CACHE_TTL,
                defaults.caches.api,
            ),
            fallback: Self::parse_cache_from_env(
                Self::ENV_DEFAULT_CACHE_SIZE,
                Self::ENV_DEFAULT_CACHE_TTL,
                defaults.caches.fallback,
            ),
        };

        Ok(Self {
            similarity_method,
            caches,
            completion_base_url: Self::parse_string_from_env(
                Self::ENV_COMPLETION_BASE_URL,
                defaults.completion_base_url,
            ),
            completion_model: Self::parse_string_from_env(
                Self::ENV_COMPLETION_MODEL,
                defaults.completion_model,
            ),
            completion_api_key: Self::parse_optional_string_from_env(Self::ENV_COMPLETION_API_KEY),
            completion_timeout: Duration::from_secs(Self::parse_u64_from_env(
                Self::ENV_COMPLETION_TIMEOUT,
                defaults.completion_timeout.as_secs(),
            )),
            retry_max_attempts: Self::parse_u64_from_env(
                Self::ENV_RETRY_MAX_ATTEMPTS,
                u64::from(defaults.retry_max_attempts),
            )
            .try_into()
            .unwrap_or(defaults.retry_max_attempts),
            retry_delay: Duration::from_millis(Self::parse_u64_from_env(
                Self::ENV_RETRY_DELAY,
                defaults.retry_delay.as_millis() as u64,
            )),
            chunk_size: Self::parse_usize_from_env(Self::ENV_CHUNK_SIZE, defaults.chunk_size),
            chunk_overlap: Self::parse_usize_from_env(
                Self::ENV_CHUNK_OVERLAP,
                defaults.chunk_overlap,
            ),
            sweep_interval: Duration::from_secs(Self::parse_u64_from_env(
                Self::ENV_SWEEP_INTERVAL,
                defaults.sweep_interval.as_secs(),
            )),
        })
    }

    /// Checks invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let caches = [
            ("vector_cache", self.caches.vector),
            ("search_cache", self.caches.search),
            ("api_cache", self.caches.api),
            ("default_cache", self.caches.fallback),
        ];
        for (name, cache) in caches {
            if cache.max_size == 0 {
                return Err(ConfigError::ZeroCapacity { name });
            }
        }

        if self.chunk_size == 0 || self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::InvalidChunking {
                chunk_size: self.chunk_size,
                overlap: self.chunk_overlap,
            });
        }

        if self.completion_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: Self::ENV_COMPLETION_TIMEOUT,
            });
        }

        if self.sweep_interval.is_zero() {
            return Err(ConfigError::ZeroDuration {
                name: Self::ENV_SWEEP_INTERVAL,
            });
        }

        Ok(())
    }

    /// Returns the API key or an error naming the variable to set.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.completion_api_key
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_COMPLETION_API_KEY,
            })
    }

    pub fn registry_config(&self) -> RegistryConfig {
        self.caches.clone()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_max_attempts, self.retry_delay)
    }

    pub fn chunking(&self) -> ChunkingConfig {
        ChunkingConfig {
            chunk_size: self.chunk_size,
            overlap: self.chunk_overlap,
        }
    }

    pub fn chat_client_config(&self) -> ChatClientConfig {
        ChatClientConfig {
            base_url: self.completion_base_url.clone(),
            model: self.completion_model.clone(),
            api_key: self.completion_api_key.clone(),
            timeout: self.completion_timeout,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    fn parse_method_from_env(default: SimilarityMethod) -> Result<SimilarityMethod, ConfigError> {
        match env::var(Self::ENV_SIMILARITY_METHOD) {
            Ok(value) if value.trim().is_empty() => Ok(default),
            Ok(value) => value
                .parse()
                .map_err(|err: UnknownMethodError| ConfigError::UnknownSimilarityMethod {
                    value: err.value,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_cache_from_env(size_var: &str, ttl_var: &str, default: CacheConfig) -> CacheConfig {
        let max_size = Self::parse_usize_from_env(size_var, default.max_size);
        let ttl_secs = Self::parse_u64_from_env(
            ttl_var,
            default.ttl.map_or(0, |ttl| ttl.as_secs()),
        );
        CacheConfig::from_secs(max_size, ttl_secs)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    fn parse_usize_from_env(var_name: &str, default: usize) -> usize {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

use std::time::Duration;

use serde::Serialize;

use crate::constants::{DEFAULT_CACHE_SIZE, DEFAULT_CACHE_TTL_SECS};

/// Capacity and expiry settings for one [`BoundedCache`](super::BoundedCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once.
    pub max_size: usize,
    /// Maximum entry age. `None` disables expiry.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_CACHE_SIZE,
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }
}

impl CacheConfig {
    pub fn new(max_size: usize, ttl: Option<Duration>) -> Self {
        Self { max_size, ttl }
    }

    /// Builds a config from whole seconds; `0` means "never expires".
    pub fn from_secs(max_size: usize, ttl_secs: u64) -> Self {
        let ttl = (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs));
        Self { max_size, ttl }
    }

    /// Config without expiry.
    pub fn unbounded_ttl(max_size: usize) -> Self {
        Self { max_size, ttl: None }
    }
}

/// Point-in-time counters for one cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hit_count: u64,
    pub miss_count: u64,
    /// `hit / (hit + miss)`, or `0.0` before the first lookup.
    pub hit_rate: f64,
    pub is_full: bool,
}

impl CacheStats {
    /// Total number of `get` calls counted.
    #[inline]
    pub fn requests(&self) -> u64 {
        self.hit_count + self.miss_count
    }
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "size={}/{}, hit_rate={:.2}%",
            self.size,
            self.max_size,
            self.hit_rate * 100.0
        )
    }
}

/// Maintenance operations shared by every cache regardless of value type.
///
/// The registry stores caches behind this trait so it can clear, sweep and
/// report on all of them without knowing what they hold.
pub trait CacheMaintenance: Send + Sync {
    fn clear(&self);
    fn stats(&self) -> CacheStats;
    fn cleanup_expired(&self) -> usize;
}

//! Fixed-capacity LRU cache with optional per-entry TTL.
//!
//! Recency is tracked with a monotonically increasing tick: each entry
//! remembers the tick of its last use, and `order` maps ticks back to keys so
//! the least-recently-used entry is always `order.first_key_value()`.
//!
//! The entry table, the recency order and the hit/miss counters sit in one
//! [`CacheState`] behind a single mutex. Helpers operate on `&mut CacheState`
//! and never take the lock themselves, so an entry can never be visible in one
//! structure without the other.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use super::types::{CacheConfig, CacheMaintenance, CacheStats};

struct Slot<V> {
    value: V,
    touched_at: Instant,
    tick: u64,
}

struct CacheState<V> {
    entries: HashMap<String, Slot<V>>,
    order: BTreeMap<u64, String>,
    next_tick: u64,
    hit_count: u64,
    miss_count: u64,
}

impl<V> CacheState<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_tick: 0,
            hit_count: 0,
            miss_count: 0,
        }
    }

    fn bump_tick(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    /// Moves `key` to the most-recently-used end and resets its timestamp.
    fn touch(&mut self, key: &str, now: Instant) {
        let tick = self.bump_tick();
        if let Some(slot) = self.entries.get_mut(key) {
            self.order.remove(&slot.tick);
            slot.tick = tick;
            slot.touched_at = now;
            self.order.insert(tick, key.to_string());
        }
    }

    fn remove_key(&mut self, key: &str) -> Option<V> {
        let slot = self.entries.remove(key)?;
        self.order.remove(&slot.tick);
        Some(slot.value)
    }

    fn evict_lru(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.entries.remove(&key);
        Some(key)
    }
}

#[inline]
fn is_expired(touched_at: Instant, ttl: Option<Duration>, now: Instant) -> bool {
    ttl.is_some_and(|ttl| now.saturating_duration_since(touched_at) > ttl)
}

/// Thread-safe LRU cache with optional TTL.
pub struct BoundedCache<V> {
    max_size: usize,
    ttl: Option<Duration>,
    state: Mutex<CacheState<V>>,
}

impl<V: Clone> BoundedCache<V> {
    /// Creates a cache. A `max_size` of zero is clamped to one.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            max_size: config.max_size.max(1),
            ttl: config.ttl,
            state: Mutex::new(CacheState::new()),
        }
    }

    /// Returns a clone of the value for `key` if present and unexpired.
    ///
    /// A hit refreshes the entry's recency and timestamp. An expired entry is
    /// removed and counted as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut state = self.state.lock();

        let Some(slot) = state.entries.get(key) else {
            state.miss_count += 1;
            return None;
        };

        if is_expired(slot.touched_at, self.ttl, now) {
            state.remove_key(key);
            state.miss_count += 1;
            debug!(key, "cache entry expired");
            return None;
        }

        let value = slot.value.clone();
        state.touch(key, now);
        state.hit_count += 1;
        Some(value)
    }

    /// Inserts or overwrites `key`, evicting the least-recently-used entry
    /// when a new key would exceed capacity.
    pub fn put(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        let now = Instant::now();
        let mut state = self.state.lock();

        if let Some(slot) = state.entries.get_mut(&key) {
            slot.value = value;
            state.touch(&key, now);
            return;
        }

        if state.entries.len() >= self.max_size
            && let Some(evicted) = state.evict_lru()
        {
            debug!(key = %evicted, max_size = self.max_size, "evicted least-recently-used entry");
        }

        let tick = state.bump_tick();
        state.order.insert(tick, key.clone());
        state.entries.insert(
            key,
            Slot {
                value,
                touched_at: now,
                tick,
            },
        );
    }

    /// Removes `key` without touching the hit/miss counters.
    pub fn remove(&self, key: &str) -> Option<V> {
        self.state.lock().remove_key(key)
    }

    /// Removes every entry and resets the counters.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
        state.hit_count = 0;
        state.miss_count = 0;
    }

    pub fn size(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.size() >= self.max_size
    }

    /// Presence check that does not affect recency, counters or expiry.
    pub fn contains(&self, key: &str) -> bool {
        self.state.lock().entries.contains_key(key)
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    pub fn get_stats(&self) -> CacheStats {
        let state = self.state.lock();
        let requests = state.hit_count + state.miss_count;
        let hit_rate = if requests > 0 {
            state.hit_count as f64 / requests as f64
        } else {
            0.0
        };
        let size = state.entries.len();

        CacheStats {
            size,
            max_size: self.max_size,
            hit_count: state.hit_count,
            miss_count: state.miss_count,
            hit_rate,
            is_full: size >= self.max_size,
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    ///
    /// Always `0` when no TTL is configured.
    pub fn cleanup_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = Instant::now();
        let mut state = self.state.lock();
        let expired: Vec<String> = state
            .entries
            .iter()
            .filter(|(_, slot)| is_expired(slot.touched_at, self.ttl, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            state.remove_key(key);
        }
        expired.len()
    }

    /// Keys from least- to most-recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.state.lock().order.values().cloned().collect()
    }
}

impl<V: Clone + Send> CacheMaintenance for BoundedCache<V> {
    fn clear(&self) {
        BoundedCache::clear(self);
    }

    fn stats(&self) -> CacheStats {
        self.get_stats()
    }

    fn cleanup_expired(&self) -> usize {
        BoundedCache::cleanup_expired(self)
    }
}

impl<V> std::fmt::Debug for BoundedCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedCache")
            .field("size", &self.state.lock().entries.len())
            .field("max_size", &self.max_size)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Shared handle to a [`BoundedCache`].
pub struct CacheHandle<V> {
    inner: Arc<BoundedCache<V>>,
}

impl<V> Clone for CacheHandle<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> CacheHandle<V> {
    /// Creates a standalone cache (not registered anywhere).
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(BoundedCache::new(config)),
        }
    }

    pub(crate) fn from_arc(inner: Arc<BoundedCache<V>>) -> Self {
        Self { inner }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.get(key)
    }

    #[inline]
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.inner.put(key, value);
    }

    #[inline]
    pub fn remove(&self, key: &str) -> Option<V> {
        self.inner.remove(key)
    }

    #[inline]
    pub fn clear(&self) {
        self.inner.clear();
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.inner.max_size()
    }

    #[inline]
    pub fn ttl(&self) -> Option<Duration> {
        self.inner.ttl()
    }

    #[inline]
    pub fn get_stats(&self) -> CacheStats {
        self.inner.get_stats()
    }

    #[inline]
    pub fn cleanup_expired(&self) -> usize {
        self.inner.cleanup_expired()
    }

    #[inline]
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.inner.keys_by_recency()
    }

    /// Returns `true` if both handles point at the same cache instance.
    #[inline]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<V> std::fmt::Debug for CacheHandle<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheHandle")
            .field("inner", &self.inner)
            .finish()
    }
}

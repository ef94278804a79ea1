//! Named cache provisioning.
//!
//! A [`CacheRegistry`] is constructed once by the host process and passed to
//! every component that needs a cache. The first request for a name creates
//! the instance; later requests get the same instance and their configuration
//! is ignored.

use std::any::{Any, type_name};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::bounded::{BoundedCache, CacheHandle};
use super::error::RegistryError;
use super::types::{CacheConfig, CacheMaintenance, CacheStats};
use crate::constants::{
    API_CACHE_NAME, API_CACHE_SIZE, API_CACHE_TTL_SECS, SEARCH_CACHE_NAME, SEARCH_CACHE_SIZE,
    SEARCH_CACHE_TTL_SECS, VECTOR_CACHE_NAME, VECTOR_CACHE_SIZE, VECTOR_CACHE_TTL_SECS,
};

/// Per-name configuration used when a cache is created without an explicit config.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub vector: CacheConfig,
    pub search: CacheConfig,
    pub api: CacheConfig,
    /// Applied to every other name.
    pub fallback: CacheConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            vector: CacheConfig::from_secs(VECTOR_CACHE_SIZE, VECTOR_CACHE_TTL_SECS),
            search: CacheConfig::from_secs(SEARCH_CACHE_SIZE, SEARCH_CACHE_TTL_SECS),
            api: CacheConfig::from_secs(API_CACHE_SIZE, API_CACHE_TTL_SECS),
            fallback: CacheConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Returns the configuration a new cache called `name` would get.
    pub fn config_for(&self, name: &str) -> CacheConfig {
        match name {
            VECTOR_CACHE_NAME => self.vector,
            SEARCH_CACHE_NAME => self.search,
            API_CACHE_NAME => self.api,
            _ => self.fallback,
        }
    }
}

struct RegisteredCache {
    maintenance: Arc<dyn CacheMaintenance>,
    typed: Arc<dyn Any + Send + Sync>,
    value_type: &'static str,
}

impl RegisteredCache {
    fn new<V: Clone + Send + 'static>(config: CacheConfig) -> (Self, Arc<BoundedCache<V>>) {
        let cache = Arc::new(BoundedCache::<V>::new(config));
        let registered = Self {
            maintenance: cache.clone(),
            typed: cache.clone(),
            value_type: type_name::<V>(),
        };
        (registered, cache)
    }

    fn handle<V: Clone + Send + 'static>(
        &self,
        name: &str,
    ) -> Result<CacheHandle<V>, RegistryError> {
        Arc::clone(&self.typed)
            .downcast::<BoundedCache<V>>()
            .map(CacheHandle::from_arc)
            .map_err(|_| RegistryError::TypeMismatch {
                name: name.to_string(),
                existing: self.value_type,
                requested: type_name::<V>(),
            })
    }
}

/// Process-wide namespace of named caches.
pub struct CacheRegistry {
    config: RegistryConfig,
    caches: RwLock<HashMap<String, RegisteredCache>>,
}

impl CacheRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            caches: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the cache called `name`, creating it with the registry's
    /// configuration for that name on first use.
    pub fn cache<V: Clone + Send + 'static>(
        &self,
        name: &str,
    ) -> Result<CacheHandle<V>, RegistryError> {
        self.cache_with(name, self.config.config_for(name))
    }

    /// Returns the cache called `name`, creating it with `config` on first use.
    ///
    /// `config` is ignored when the cache already exists.
    pub fn cache_with<V: Clone + Send + 'static>(
        &self,
        name: &str,
        config: CacheConfig,
    ) -> Result<CacheHandle<V>, RegistryError> {
        if let Some(existing) = self.caches.read().get(name) {
            return existing.handle(name);
        }

        let mut caches = self.caches.write();
        // Another caller may have created it between the read and write locks.
        if let Some(existing) = caches.get(name) {
            return existing.handle(name);
        }

        let (registered, cache) = RegisteredCache::new::<V>(config);
        caches.insert(name.to_string(), registered);
        info!(
            name,
            max_size = cache.max_size(),
            ttl_secs = cache.ttl().map(|ttl| ttl.as_secs()),
            "created cache"
        );
        Ok(CacheHandle::from_arc(cache))
    }

    /// Clears every registered cache (entries and counters).
    pub fn clear_all(&self) {
        for cache in self.caches.read().values() {
            cache.maintenance.clear();
        }
        debug!("cleared all caches");
    }

    /// Returns stats for every registered cache, ordered by name.
    pub fn get_all_stats(&self) -> BTreeMap<String, CacheStats> {
        self.caches
            .read()
            .iter()
            .map(|(name, cache)| (name.clone(), cache.maintenance.stats()))
            .collect()
    }

    /// Sweeps expired entries from every cache; returns the total removed.
    pub fn cleanup_all(&self) -> usize {
        let removed: usize = self
            .caches
            .read()
            .values()
            .map(|cache| cache.maintenance.cleanup_expired())
            .sum();
        if removed > 0 {
            debug!(removed, "swept expired cache entries");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caches.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caches.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.caches.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.caches.read().is_empty()
    }

    /// Drops every registered instance. Outstanding handles keep working but
    /// are no longer reachable through the registry.
    pub fn reset(&self) {
        self.caches.write().clear();
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl std::fmt::Debug for CacheRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheRegistry")
            .field("caches", &self.names())
            .finish()
    }
}

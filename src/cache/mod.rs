//! Bounded expiring caches and the registry that provisions them.
//!
//! - [`BoundedCache`] is a thread-safe LRU cache with optional TTL.
//! - [`CacheRegistry`] hands out one shared instance per name.

pub mod bounded;
pub mod error;
pub mod registry;
pub mod types;


pub use bounded::{BoundedCache, CacheHandle};
pub use error::RegistryError;
pub use registry::{CacheRegistry, RegistryConfig};
pub use types::{CacheConfig, CacheMaintenance, CacheStats};

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::cache::{CacheConfig, CacheRegistry};

fn registry_with_expiring_entries(count: usize) -> Arc<CacheRegistry> {
    let registry = Arc::new(CacheRegistry::default());
    let cache = registry
        .cache_with::<String>("short_lived", CacheConfig::from_secs(10, 1))
        .expect("cache");
    for i in 0..count {
        cache.put(format!("k{i}"), format!("v{i}"));
    }
    registry
}

#[test]
fn test_sweep_now_leaves_fresh_entries() {
    let registry = registry_with_expiring_entries(3);
    let sweeper = CacheSweeper::new(Arc::clone(&registry), Duration::from_secs(60));

    assert_eq!(sweeper.sweep_now(), 0);
    assert_eq!(registry.get_all_stats()["short_lived"].size, 3);
}

#[tokio::test]
async fn test_background_sweep_removes_expired_entries() {
    let registry = registry_with_expiring_entries(3);
    let sweeper = CacheSweeper::new(Arc::clone(&registry), Duration::from_millis(100));

    let handle = sweeper.start();
    assert!(sweeper.is_running());
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(registry.get_all_stats()["short_lived"].size, 0);
    assert_eq!(sweeper.removed_total(), 3);

    sweeper.stop();
    handle.await.expect("sweeper task");
    assert!(!sweeper.is_running());
}

#[tokio::test]
async fn test_start_is_idempotent() {
    let registry = Arc::new(CacheRegistry::default());
    let sweeper = CacheSweeper::new(registry, Duration::from_millis(50));

    let first = sweeper.start();
    let second = sweeper.start();
    second.await.expect("no-op task");
    assert!(sweeper.is_running());

    sweeper.stop();
    first.await.expect("sweeper task");
    assert!(!sweeper.is_running());
}

#[tokio::test]
async fn test_stop_is_prompt_with_long_interval() {
    let sweeper = CacheSweeper::with_default_interval(Arc::new(CacheRegistry::default()));
    assert_eq!(sweeper.interval(), Duration::from_secs(300));

    let handle = sweeper.start();
    tokio::task::yield_now().await;
    sweeper.stop();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("stops without waiting for the next tick")
        .expect("sweeper task");
}

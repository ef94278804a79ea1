use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time;
use tracing::{debug, info};

use crate::cache::CacheRegistry;
use crate::constants::DEFAULT_SWEEP_INTERVAL_SECS;

/// Periodically runs [`CacheRegistry::cleanup_all`] on a tokio task.
pub struct CacheSweeper {
    registry: Arc<CacheRegistry>,
    interval: Duration,
    running: Arc<AtomicBool>,
    stop_requested: Arc<AtomicBool>,
    stop_signal: Arc<Notify>,
    removed_total: Arc<AtomicU64>,
}

impl CacheSweeper {
    pub fn new(registry: Arc<CacheRegistry>, interval: Duration) -> Self {
        Self {
            registry,
            interval: interval.max(Duration::from_millis(1)),
            running: Arc::new(AtomicBool::new(false)),
            stop_requested: Arc::new(AtomicBool::new(false)),
            stop_signal: Arc::new(Notify::new()),
            removed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_default_interval(registry: Arc<CacheRegistry>) -> Self {
        Self::new(registry, Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Entries removed by all sweeps so far.
    pub fn removed_total(&self) -> u64 {
        self.removed_total.load(Ordering::Acquire)
    }

    /// Runs one sweep immediately, outside the background schedule.
    pub fn sweep_now(&self) -> usize {
        let removed = self.registry.cleanup_all();
        self.removed_total.fetch_add(removed as u64, Ordering::AcqRel);
        removed
    }

    /// Starts the background task (no-op if already running).
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        if self.running.swap(true, Ordering::AcqRel) {
            return tokio::spawn(async {});
        }
        self.stop_requested.store(false, Ordering::Release);

        let registry = Arc::clone(&self.registry);
        let running = Arc::clone(&self.running);
        let stop_requested = Arc::clone(&self.stop_requested);
        let stop_signal = Arc::clone(&self.stop_signal);
        let removed_total = Arc::clone(&self.removed_total);
        let period = self.interval;

        info!(interval_ms = period.as_millis() as u64, "cache sweeper started");
        tokio::spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
            // First tick fires immediately.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {}
                    _ = stop_signal.notified() => {}
                }
                if stop_requested.load(Ordering::Acquire) {
                    break;
                }

                let removed = registry.cleanup_all();
                removed_total.fetch_add(removed as u64, Ordering::AcqRel);
                debug!(removed, "cache sweep finished");
            }

            running.store(false, Ordering::Release);
            info!("cache sweeper stopped");
        })
    }

    /// Asks the background task to exit; it finishes any sweep in progress.
    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.stop_signal.notify_one();
    }
}

impl Drop for CacheSweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for CacheSweeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheSweeper")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .field("removed_total", &self.removed_total())
            .finish()
    }
}

//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;
use crate::config::CacheConfig;

// == Sweeper ==
/// Handle to a running sweeper task.
///
/// The task only holds a weak reference to the store, so it never keeps the
/// store alive. Dropping the handle signals the task to stop.
#[derive(Debug)]
pub struct Sweeper {
    shutdown_tx: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Sweeper {
    /// Spawns a task that removes expired entries from `store` every `interval`.
    ///
    /// The first sweep runs one full interval after spawning. A zero
    /// interval is replaced by [`CacheConfig::DEFAULT_CLEANUP_INTERVAL`].
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn<V>(store: &Arc<CacheStore<V>>, interval: Duration) -> Self
    where
        V: Send + Sync + 'static,
    {
        let interval = if interval.is_zero() {
            CacheConfig::DEFAULT_CLEANUP_INTERVAL
        } else {
            interval
        };
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(run(Arc::downgrade(store), interval, shutdown_rx));

        Self {
            shutdown_tx,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Signals the task to stop without waiting for it.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Signals the task to stop and waits until it has exited.
    pub async fn shutdown(&self) {
        self.stop();

        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!("TTL sweeper exited abnormally: {}", err);
            }
        }
    }

    /// Returns true while the task is still running.
    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run<V>(
    store: Weak<CacheStore<V>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    info!("Starting TTL sweeper with interval of {:?}", interval);

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(store) = store.upgrade() else {
                    break;
                };
                let removed = store.cleanup_expired();

                if removed > 0 {
                    info!("TTL sweep: removed {} expired entries", removed);
                } else {
                    debug!("TTL sweep: no expired entries found");
                }
            }
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug!("TTL sweeper stopped");
}

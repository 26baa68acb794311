//! Cache Engine Module
//!
//! Public cache handle combining the store with its background sweeper.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::tasks::Sweeper;

// == Cache ==
/// Thread-safe in-memory key-value cache with TTL expiration.
///
/// Expired entries are hidden from every read as soon as their TTL elapses.
/// They are physically removed either by the read that notices them or by
/// the background sweeper, whichever comes first.
///
/// Share a cache between threads or tasks by wrapping it in an `Arc`.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use ttl_cache::{Cache, CacheConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let cache = Cache::new(CacheConfig::default());
///
///     cache.set("a", "1".to_string());
///     cache.set_with_ttl("b", "2".to_string(), Duration::from_millis(50));
///     assert_eq!(cache.get("a").as_deref(), Some("1"));
///
///     cache.shutdown().await;
/// }
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<CacheStore<V>>,
    sweeper: Sweeper,
    config: CacheConfig,
}

impl<V> Cache<V>
where
    V: Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and starts its background sweeper.
    ///
    /// A zero cleanup interval is replaced by
    /// [`CacheConfig::DEFAULT_CLEANUP_INTERVAL`]. `max_size` is kept in the
    /// configuration but never enforced.
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime, which the sweeper needs.
    pub fn new(config: CacheConfig) -> Self {
        let store = Arc::new(CacheStore::new());
        let sweeper = Sweeper::spawn(&store, config.effective_cleanup_interval());

        debug!(
            "Cache created: cleanup_interval={:?}, max_size={} (advisory)",
            config.effective_cleanup_interval(),
            config.max_size
        );

        Self {
            store,
            sweeper,
            config,
        }
    }
}

impl<V> Default for Cache<V>
where
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<V> Cache<V> {
    // == Set ==
    /// Stores a value that never expires, replacing any existing entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.store.set(key.into(), value, None);
    }

    // == Set With TTL ==
    /// Stores a value that expires after `ttl`.
    ///
    /// A zero `ttl` behaves exactly like [`Cache::set`].
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.store.set(key.into(), value, Some(ttl));
    }

    // == Delete ==
    /// Removes `key` whether or not it has expired.
    ///
    /// Returns true if the key was present.
    pub fn delete(&self, key: &str) -> bool {
        self.store.delete(key)
    }

    // == Exists ==
    /// Returns true if `key` holds a live value.
    ///
    /// An expired entry found here is removed.
    pub fn exists(&self, key: &str) -> bool {
        self.store.exists(key)
    }

    // == Keys ==
    /// Returns all live keys, in no particular order.
    ///
    /// Does not remove expired entries.
    pub fn keys(&self) -> Vec<String> {
        self.store.keys()
    }

    // == Flush ==
    /// Removes every entry and returns how many there were, including
    /// expired entries not yet swept.
    pub fn flush(&self) -> usize {
        self.store.flush()
    }

    // == Size ==
    /// Returns the number of stored entries.
    ///
    /// This is a raw count: expired entries that have not been removed yet
    /// are included.
    pub fn size(&self) -> usize {
        self.store.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored, counting expired entries not yet removed.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // == Sweep ==
    /// Runs one sweep immediately and returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        self.store.cleanup_expired()
    }

    // == Config ==
    /// Returns the configuration the cache was created with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Sweeper Lifecycle ==
    /// Returns true until the background sweeper has stopped.
    pub fn is_sweeper_running(&self) -> bool {
        self.sweeper.is_running()
    }

    /// Signals the background sweeper to stop without waiting for it.
    ///
    /// The cache stays usable; expired entries are then only removed lazily
    /// or through [`Cache::sweep`].
    pub fn stop(&self) {
        self.sweeper.stop();
    }

    /// Stops the background sweeper and waits for it to exit.
    pub async fn shutdown(&self) {
        self.sweeper.shutdown().await;
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Returns a copy of the live value stored under `key`.
    ///
    /// An expired entry found here is removed and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        self.store.get(key)
    }
}

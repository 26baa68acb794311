//! Cache Store Module
//!
//! Concurrent key-value storage with lazy TTL expiration.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::cache::CacheEntry;

// == Cache Store ==
/// HashMap storage guarded by a reader/writer lock.
///
/// Reads of live entries only take the shared lock. A read that finds an
/// expired entry releases it, takes the exclusive lock and checks the entry
/// again before deleting it, since another writer may have refreshed or
/// removed the key in between.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // == Set ==
    /// Stores a value, replacing any existing entry for the key.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL, None or zero = never expires
    pub fn set(&self, key: String, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl);
        self.entries.write().insert(key, entry);
    }

    // == Lookup ==
    /// Applies `read` to the live entry for `key`, deleting the entry if it
    /// turns out to be expired.
    fn lookup<R>(&self, key: &str, read: impl Fn(&CacheEntry<V>) -> R) -> Option<R> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired() => return Some(read(entry)),
                Some(_) => {}
            }
        }

        // Expired under the shared lock; recheck under the exclusive one.
        let mut entries = self.entries.write();
        match entries.get(key) {
            None => None,
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(read(entry)),
        }
    }

    // == Exists ==
    /// Returns true if the key holds a live entry.
    ///
    /// Like `get`, this deletes the entry when it is found expired.
    pub fn exists(&self, key: &str) -> bool {
        self.lookup(key, |_| ()).is_some()
    }

    // == Delete ==
    /// Removes an entry regardless of its expiration state.
    ///
    /// Returns true if the key was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    // == Keys ==
    /// Returns every live key from a single snapshot.
    ///
    /// Expired entries are skipped but left in place.
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read();
        let now = Instant::now();

        entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == Flush ==
    /// Removes every entry, expired or not, and returns how many were removed.
    pub fn flush(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let now = Instant::now();
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired_at(now));

        before - entries.len()
    }

    // == Length ==
    /// Returns the raw number of stored entries, including expired ones
    /// not yet removed.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Retrieves a copy of the live value for `key`.
    ///
    /// Expired entries are removed and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lookup(key, |entry| entry.value.clone())
    }
}

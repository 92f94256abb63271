//! Cache Store Module
//!
//! Main cache engine: HashMap storage with lazy TTL expiry on reads and
//! eager sweeps on demand.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory TTL store, generic over the payload type.
///
/// A key maps to at most one live entry. Expired entries are semantically
/// absent: `get` removes them on sight, and `cleanup` sweeps the whole map.
/// Growth is unbounded between sweeps; there is no capacity ceiling and no
/// eviction beyond TTL expiry.
#[derive(Debug)]
pub struct CacheStore<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<T> CacheStore<T> {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Retrieves the value for a key, if present and fresh.
    ///
    /// A found-but-expired entry is deleted before `None` is returned, so
    /// the read path self-heals independently of the periodic sweep.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expired(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value under a key with the given TTL.
    ///
    /// Any existing entry is replaced unconditionally; both the insertion
    /// timestamp and the TTL reset. Expiry is never evaluated here.
    pub fn set(&mut self, key: String, value: T, ttl: Duration) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns true if an entry existed and was removed. A missing key is
    /// not an error.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Delete Pattern ==
    /// Removes every entry whose key contains `pattern` as a literal
    /// substring (not a regular expression).
    ///
    /// Used to invalidate all cached facets of one logical resource, e.g.
    /// every key embedding a given thread id, without enumerating exact
    /// keys.
    pub fn delete_pattern(&mut self, pattern: &str) {
        self.entries.retain(|key, _| !key.contains(pattern));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup ==
    /// Eagerly removes every expired entry.
    ///
    /// Returns the number of entries removed, for sweep logging.
    pub fn cleanup(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        self.stats.record_expired(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Length ==
    /// Raw count of entries currently held, including not-yet-swept
    /// expired ones. Callers wanting a live count run `cleanup` first.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

impl<T> Default for CacheStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

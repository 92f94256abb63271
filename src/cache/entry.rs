//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cache entry: opaque payload plus expiry metadata.
///
/// The payload is never inspected or transformed by the store. Timestamps
/// use `tokio::time::Instant` so tests on a paused runtime clock control
/// expiry deterministically.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored payload
    pub value: T,
    /// Instant captured at write time
    pub inserted_at: Instant,
    /// Time-to-live supplied at write time
    pub ttl: Duration,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry, capturing the insertion instant now.
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once strictly more than its TTL has elapsed
    /// since insertion. The check is a pure duration comparison against
    /// the insertion instant; no absolute deadline is precomputed.
    ///
    /// A zero TTL makes the entry eligible for expiry on the very next
    /// read, as soon as any time at all has passed.
    pub fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining freshness window, zero once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.inserted_at.elapsed())
    }
}

//! Cached-Call Wrapper
//!
//! Wraps an async producer with the store: return the cached value when
//! fresh, otherwise invoke the producer, cache its result, and return it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheStore;

/// Shared handle to a cache store, as injected into request-handling code
/// and the cleanup task.
pub type SharedStore<T> = Arc<RwLock<CacheStore<T>>>;

/// Returns the cached value for `key` if fresh, otherwise awaits
/// `producer`, stores its result under `key` with `ttl`, and returns it.
///
/// The store lock is released before the producer runs, so a slow fetch
/// never blocks access to other keys. There is no in-flight deduplication:
/// concurrent misses for the same key each invoke their producer and the
/// last completed `set` wins.
///
/// A producer failure propagates unchanged and writes nothing; the cache
/// never holds partial or poisoned entries.
pub async fn cached_call<T, E, F, Fut>(
    store: &SharedStore<T>,
    key: &str,
    ttl: Duration,
    producer: F,
) -> Result<T, E>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(value) = store.write().await.get(key) {
        debug!(key, "cache hit");
        return Ok(value);
    }

    debug!(key, "cache miss, invoking producer");
    let value = producer().await?;
    store
        .write()
        .await
        .set(key.to_string(), value.clone(), ttl);

    Ok(value)
}

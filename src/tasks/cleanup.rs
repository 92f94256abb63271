//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries, so
//! stale entries that are never read again cannot accumulate between
//! accesses.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedStore;

/// Spawns the background sweep task.
///
/// One `cleanup` pass runs immediately on spawn to establish a clean
/// baseline, then the task loops forever: sleep for `interval`, sweep,
/// repeat. The returned handle is the only stop mechanism; graceful
/// shutdown aborts it, and the process otherwise runs it until exit.
pub fn spawn_cleanup_task<T>(cache: SharedStore<T>, interval: Duration) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_secs = interval.as_secs(), "starting cache sweep task");

        sweep(&cache).await;

        loop {
            tokio::time::sleep(interval).await;
            sweep(&cache).await;
        }
    })
}

async fn sweep<T>(cache: &SharedStore<T>) {
    let removed = {
        let mut guard = cache.write().await;
        guard.cleanup()
    };

    if removed > 0 {
        info!(removed, "cache sweep removed expired entries");
    } else {
        debug!("cache sweep found no expired entries");
    }
}

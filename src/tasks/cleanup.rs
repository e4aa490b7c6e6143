//! Expiry Purge Task
//!
//! Background task that periodically drops stale memoized results.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::demo::MemoTable;

/// Spawns a background task that periodically purges expired memo entries.
///
/// Only the TIME policy has a notion of staleness; for every other policy
/// each run is a no-op.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_cleanup_task(state.memo.clone(), 1);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_cleanup_task(memo: Arc<Mutex<MemoTable>>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = purge_interval(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting memo purge task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut memo_guard = memo.lock().await;
                memo_guard.purge_expired()
            };

            if removed > 0 {
                info!("Memo purge: removed {} expired entries", removed);
            } else {
                debug!("Memo purge: no expired entries found");
            }
        }
    })
}

/// Sleep between purges. Zero is raised to one second so the loop never spins.
fn purge_interval(secs: u64) -> Duration {
    Duration::from_secs(secs.max(1))
}

//! Cache Sweep Task
//!
//! Background task that periodically removes stale response cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{remove_stale, SharedEntries};

/// Offset of every sweep past its interval boundary: one tick of tokio's
/// millisecond timer. An entry added as the cache is built is strictly older
/// than the interval when the first sweep runs.
pub(crate) const SWEEP_SLACK: Duration = Duration::from_millis(1);

/// Spawns the background sweep for a response cache.
///
/// Every `interval` the task locks the entry map and removes every entry whose
/// age exceeds `interval`. The first sweep happens one interval plus
/// [`SWEEP_SLACK`] after the task is spawned. Ticks missed while the runtime
/// was busy are skipped rather than replayed in a burst.
///
/// # Arguments
/// * `entries` - Entry map shared with the owning cache
/// * `interval` - Sweep cadence, also used as the staleness threshold
///
/// # Returns
/// A JoinHandle for the spawned task, which the owning cache aborts when it is
/// shut down or dropped.
pub(crate) fn spawn_reap_task(entries: SharedEntries, interval: Duration) -> JoinHandle<()> {
    let start = Instant::now() + interval + SWEEP_SLACK;

    tokio::spawn(async move {
        debug!("Starting cache sweep with interval of {:?}", interval);

        let mut ticker = interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let (removed, remaining) = {
                let mut guard = entries.lock().await;
                let removed = remove_stale(&mut guard, interval);
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Cache sweep: removed {} stale entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }
    })
}

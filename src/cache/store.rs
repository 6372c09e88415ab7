//! Response Cache Module
//!
//! Expiring key-value store that sits between the command layer and the network.
//! Entries are swept in batches by a background task rather than expiring on read.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheEntry;
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reap_task;

/// Entry map shared between the cache handle and its sweep task.
pub(crate) type SharedEntries = Arc<Mutex<HashMap<String, CacheEntry>>>;

// == Response Cache ==
/// Time-expiring cache of raw response payloads keyed by request URL.
///
/// Every operation, including the sweep, goes through one lock over the whole map.
/// The sweep task lives as long as the cache: it stops on [`ResponseCache::shutdown`]
/// or when the cache is dropped. Share the cache between tasks with an `Arc`.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: SharedEntries,
    /// Sweep cadence and staleness threshold
    interval: Duration,
    /// Background sweep task
    reaper: JoinHandle<()>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new cache and starts its background sweep.
    ///
    /// # Arguments
    /// * `interval` - How often the sweep runs, and how old an entry may get
    ///   before a sweep removes it
    ///
    /// # Errors
    /// * `InvalidInterval` if `interval` is zero
    /// * `NoRuntime` if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval(interval));
        }
        Handle::try_current().map_err(|_| PokedexError::NoRuntime)?;

        let entries: SharedEntries = Arc::new(Mutex::new(HashMap::new()));
        let reaper = spawn_reap_task(Arc::clone(&entries), interval);

        Ok(Self {
            entries,
            interval,
            reaper,
        })
    }

    // == Add ==
    /// Stores a copy of `value` under `key`, replacing any previous entry.
    ///
    /// Overwriting resets the entry's age.
    pub async fn add(&self, key: impl Into<String>, value: &[u8]) {
        let key = key.into();
        let entry = CacheEntry::new(value);

        let mut entries = self.entries.lock().await;
        entries.insert(key, entry);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// An entry is returned for as long as it is in the map, even if it is
    /// already older than the interval and waiting for the next sweep.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().await;
        entries.get(key).map(|entry| entry.value().to_vec())
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Returns the configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true while the sweep task is alive.
    pub fn is_running(&self) -> bool {
        !self.reaper.is_finished()
    }

    // == Shutdown ==
    /// Stops the background sweep. Stored entries stay readable but no longer expire.
    pub fn shutdown(&self) {
        if !self.reaper.is_finished() {
            debug!("Stopping response cache sweep");
            self.reaper.abort();
        }
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}

// == Remove Stale ==
/// Removes every entry older than `max_age`.
///
/// Returns the number of entries removed.
pub(crate) fn remove_stale(entries: &mut HashMap<String, CacheEntry>, max_age: Duration) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_stale(max_age));
    before - entries.len()
}

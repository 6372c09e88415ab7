//! Cache Entry Module
//!
//! Defines a single cached response payload and its creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload stamped with the instant it was inserted.
///
/// The entry owns its bytes outright; nothing the caller holds can reach them.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Private copy of the stored payload
    value: Vec<u8>,
    /// Insertion instant, never updated afterwards
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry holding a copy of `value`, stamped with the current instant.
    pub fn new(value: &[u8]) -> Self {
        Self {
            value: value.to_vec(),
            created_at: Instant::now(),
        }
    }

    /// Returns the stored payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the instant the entry was created.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `max_age`.
    ///
    /// Boundary condition: an entry whose age is exactly `max_age` is still
    /// fresh. Only a strictly greater age counts as stale.
    pub fn is_stale(&self, max_age: Duration) -> bool {
        self.age() > max_age
    }
}

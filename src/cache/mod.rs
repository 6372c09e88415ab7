//! Cache Module
//!
//! Provides the in-memory response cache with interval-based batch expiry.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::ResponseCache;

pub(crate) use store::{remove_stale, SharedEntries};

//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the explorer is up.
//!
//! # Tasks
//! - Cache sweep: removes stale response cache entries every interval

mod reaper;

pub(crate) use reaper::spawn_reap_task;

//! Pokedex CLI - A command-line explorer for the PokeAPI catalog
//!
//! Pages through location areas, explores them, and lets the user catch and
//! inspect Pokemon. Every response goes through a time-expiring in-memory cache
//! swept by a background task.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::ApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;

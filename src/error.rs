//! Error types for the Pokedex explorer
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache, API client and REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache interval must be greater than zero
    #[error("Invalid cache interval {0:?}: must be greater than zero")]
    InvalidInterval(Duration),

    /// Cache was constructed outside of a tokio runtime
    #[error("Response cache requires a running tokio runtime")]
    NoRuntime,

    /// Transport-level HTTP failure
    #[error("Failed to fetch URL: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK
    #[error("Received non-200 response code {status} from {url}")]
    Status { url: String, status: StatusCode },

    /// Response payload was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("Please provide {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing REPL output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;

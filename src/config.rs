//! Configuration Module
//!
//! Handles loading the explorer configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog API, without a trailing slash
    pub base_url: String,
    /// Response cache interval in seconds (sweep cadence and staleness threshold)
    pub cache_interval: u64,
    /// Number of location areas shown per `map` page
    pub page_size: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_INTERVAL` - Cache interval in seconds, must be positive (default: 60)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.cache_interval),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.page_size),
        }
    }

    /// Cache interval as a `Duration`.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: 60,
            page_size: 20,
        }
    }
}

//! Pokedex CLI - A command-line explorer for the PokeAPI catalog
//!
//! Interactive REPL backed by a time-expiring response cache.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, ApiClient, Config, ResponseCache, Session};

/// Main entry point for the Pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its background sweep
/// 4. Run the REPL on stdin/stdout until `exit`, end of input or Ctrl+C
/// 5. Stop the cache sweep
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, page_size={}",
        config.base_url, config.cache_interval, config.page_size
    );

    let cache = Arc::new(
        ResponseCache::new(config.cache_interval()).context("Failed to create response cache")?,
    );
    info!("Response cache initialized");

    let client = ApiClient::new(config.base_url.as_str(), Arc::clone(&cache))
        .with_page_size(config.page_size);
    let mut session = Session::new(client);

    println!("Welcome to the Pokedex CLI!");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => {
            result.context("REPL terminated")?;
        }
        _ = shutdown_signal() => {
            println!();
            println!("Closing the Pokedex... Goodbye!");
        }
    }

    cache.shutdown();
    info!("Pokedex closed");
    Ok(())
}

/// Waits for Ctrl+C.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::warn!("Failed to install Ctrl+C handler: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down...");
}

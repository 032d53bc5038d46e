//! `marquee-api` binary entrypoint.
//!
//! Loads configuration from environment variables, seeds the registry, and
//! starts the HTTP server.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use anyhow::Result;

use marquee_api::config::Config;
use marquee_api::server::Server;
use marquee_core::observability::{init_logging, LogFormat};
use marquee_core::registry::MovieRegistry;
use marquee_core::seed;

fn choose_log_format(config: &Config) -> LogFormat {
    if config.debug {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(choose_log_format(&config));

    let mut registry = MovieRegistry::new();
    match config.seed_path.as_deref() {
        Some(path) if path.exists() => {
            // Seed failures must not take the service down; it starts with
            // an empty registry instead.
            match seed::bootstrap(&mut registry, path) {
                Ok(count) => {
                    tracing::info!(count, path = %path.display(), "Seed data loaded");
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        path = %path.display(),
                        "Seed load failed; continuing with an empty registry"
                    );
                }
            }
        }
        Some(path) => {
            tracing::warn!(path = %path.display(), "Seed file not found; starting with an empty registry");
        }
        None => {
            tracing::warn!("MARQUEE_SEED_PATH not set; starting with an empty registry");
        }
    }

    let server = Server::with_registry(config, Arc::new(registry));
    server.serve().await?;
    Ok(())
}

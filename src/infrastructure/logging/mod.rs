//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty log formatting per configuration
//! - `RUST_LOG`-style filtering with a configured default level
//!
//! Hosts embedding the provider usually install their own subscriber; this
//! initializer is for standalone use and is a no-op when a global
//! subscriber is already set.

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::domain::models::LoggingConfig;

/// Parse a configured log level string into a tracing level.
fn parse_log_level(level: &str) -> Result<Level> {
    level
        .parse()
        .map_err(|_| anyhow!("Invalid log level: {level}"))
}

/// Initialize the global tracing subscriber from the logging configuration.
///
/// # Errors
/// Returns an error if the configured level does not parse. An already
/// installed global subscriber is not an error.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let default_level = parse_log_level(&config.level)?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    // A host-installed subscriber wins; our init quietly steps aside.
    let _ = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    Ok(())
}

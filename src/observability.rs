//! # Observability Module
//!
//! Logging setup for the command-line tool. The library logs through the
//! `log` facade; the `tracing` subscriber installed here also picks those
//! records up.

use crate::config::{AppConfig, LogFormat};
use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, writing to stderr
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!("Failed to initialize logging: {err}"))
}

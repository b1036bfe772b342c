//! Tracing setup for the duel binary.
//!
//! Logs go to stderr so stdout carries only the duel transcript.
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .or_else(|_| EnvFilter::try_new(LoggingConfig::DEFAULT_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(filter = %config.filter, "logging initialized");
    Ok(())
}

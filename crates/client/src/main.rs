//! Duel client binary.
//!
//! Runs the fixed Goblin-versus-Sentinel duel and exits.
//!
//! ```bash
//! DUEL_LOG=duel_core=debug cargo run -p duel-client
//! ```

use anyhow::Result;
use duel_client::{ClientConfig, StdoutWriter, logging, scenario};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config.logging)?;

    tracing::info!("Starting duel client");

    let outcome = scenario::run(&config.duel, StdoutWriter).inspect_err(|err| {
        match scenario::classify(err) {
            Some((severity, code)) => {
                tracing::error!(severity = severity.as_str(), code, "duel failed: {err:#}")
            }
            None => tracing::error!("duel failed: {err:#}"),
        }
    })?;

    if config.dump_history {
        println!("{}", serde_json::to_string_pretty(&outcome.restored)?);
    }

    tracing::info!("Duel client shutdown complete");
    Ok(())
}

//! Client configuration structures and loaders.
use std::env;

use duel_core::DuelConfig;

/// Configuration for one run of the duel client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub duel: DuelConfig,
    pub logging: LoggingConfig,
    pub dump_history: bool,
}

impl ClientConfig {
    pub fn new(duel: DuelConfig) -> Self {
        Self {
            duel,
            logging: LoggingConfig::default(),
            dump_history: false,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_LOG` - tracing filter directive (default: `warn`)
    /// - `DUEL_LOG_ANSI` - colorize log output (default: true)
    /// - `DUEL_DUMP_HISTORY` - print the last snapshot as JSON (default: false)
    ///
    /// Flags accept `1/true/yes/on` and `0/false/no/off`; a flag set to an
    /// empty value counts as on. Unrecognized values keep the default.
    /// The scenario itself is fixed and not read from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup("DUEL_LOG") {
            if !filter.trim().is_empty() {
                config.logging.filter = filter;
            }
        }

        if let Some(ansi) = lookup("DUEL_LOG_ANSI").as_deref().and_then(parse_flag) {
            config.logging.ansi = ansi;
        }

        if let Some(dump) = lookup("DUEL_DUMP_HISTORY").as_deref().and_then(parse_flag) {
            config.dump_history = dump;
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DuelConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: String,
    pub ansi: bool,
}

impl LoggingConfig {
    pub const DEFAULT_FILTER: &'static str = "warn";
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: Self::DEFAULT_FILTER.to_string(),
            ansi: true,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        // Setting the variable without a value means "on"
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

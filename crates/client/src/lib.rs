//! Duel client: configuration, logging, and the demo scenario.
//!
//! ```text
//! main
//!   ├─→ config   (environment-driven client settings)
//!   ├─→ logging  (tracing subscriber on stderr)
//!   └─→ scenario (fixed duel written to stdout)
//! ```
pub mod config;
pub mod logging;
pub mod scenario;

pub use config::{ClientConfig, LoggingConfig};
pub use scenario::{ScenarioOutcome, StdoutWriter};

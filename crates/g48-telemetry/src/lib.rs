//! # G48 Telemetry
//!
//! Logging setup shared by Verifiable-2048 binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use g48_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     // spans and events from every crate now reach stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `G48_LOG_LEVEL` | `RUST_LOG`, then `info` | Log filter directives |
//! | `G48_JSON_LOGS` | `false` | Emit one JSON object per event |
//! | `G48_SERVICE_NAME` | `g48-node` | Service name attached to the startup event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directives}': {reason}")]
    Filter { directives: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

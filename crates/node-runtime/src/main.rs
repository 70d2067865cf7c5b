//! # g48-node
//!
//! Replays an ordered call log against a fresh player store and prints the
//! resulting read surface as JSON on stdout.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`G48_LOG_LEVEL`, `G48_JSON_LOGS`)
//! 2. Load node configuration (`G48_CALL_LOG`, `G48_VERIFY_SIGNATURES`,
//!    `G48_EXPECTED_STATE_ROOT`)
//! 3. Replay every call in order
//! 4. Print the summary and check the expected state root

use std::sync::Arc;

use anyhow::{Context, Result};
use g48_02_player_state::{CallHandler, ControllerConfig, GameController, InMemoryPlayerStore};
use g48_telemetry::{init_logging, TelemetryConfig};
use node_runtime::{check_root, replay, NodeConfig};
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{info, warn};

async fn open_call_log(config: &NodeConfig) -> Result<Box<dyn AsyncBufRead + Unpin>> {
    match &config.call_log {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening call log {}", path.display()))?;
            info!(path = %path.display(), "Reading call log");
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("Reading call log from stdin");
            Ok(Box::new(BufReader::new(tokio::io::stdin())))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&TelemetryConfig::from_env())?;

    let config = NodeConfig::from_env()?;
    if !config.verify_signatures {
        warn!("Signature verification disabled");
    }

    let store = Arc::new(InMemoryPlayerStore::new());
    let handler = CallHandler::new(
        GameController::new(store),
        ControllerConfig {
            verify_signatures: config.verify_signatures,
        },
    );

    let reader = open_call_log(&config).await?;
    let summary = replay(reader, &handler).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("encoding summary")?
    );

    check_root(&summary, config.expected_state_root.as_ref())
}

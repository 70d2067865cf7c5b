//! # Call Log Replay
//!
//! Applies one `SignedCall` JSON document per line, in order. Rejected and
//! unparseable lines are logged and counted; replay never stops early.

use anyhow::{bail, Context, Result};
use g48_02_player_state::{state_root, CallHandler, PlayerRecord, PlayerStore};
use serde::Serialize;
use shared_types::{Hash, SignedCall};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, warn};

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    /// Calls committed.
    pub applied: u64,
    /// Calls rejected or unparseable.
    pub rejected: u64,
    /// Hex state root over every stored record.
    pub state_root: String,
    /// Stored records, sorted by owner.
    pub players: Vec<PlayerRecord>,
}

/// Replays every line of `reader` through `handler`.
pub async fn replay<R, S>(reader: R, handler: &CallHandler<S>) -> Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
    S: PlayerStore,
{
    let mut lines = reader.lines();
    let mut applied = 0u64;
    let mut rejected = 0u64;
    let mut line_no = 0u64;

    while let Some(line) = lines.next_line().await.context("reading call log")? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let call: SignedCall = match serde_json::from_str(&line) {
            Ok(call) => call,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping malformed call");
                rejected += 1;
                continue;
            }
        };

        match handler.handle(&call) {
            Ok(event) => {
                debug!(line = line_no, ?event, "Applied call");
                applied += 1;
            }
            Err(e) => {
                warn!(
                    line = line_no,
                    signer = %call.signer,
                    op = call.call.name(),
                    error = %e,
                    "Rejected call"
                );
                rejected += 1;
            }
        }
    }

    let players = handler
        .controller()
        .snapshot()
        .context("reading player snapshot")?;
    let root = state_root(&players);

    info!(applied, rejected, players = players.len(), "Replay complete");

    Ok(ReplaySummary {
        applied,
        rejected,
        state_root: hex::encode(root),
        players,
    })
}

/// Fails when `expected` is set and differs from the replayed root.
pub fn check_root(summary: &ReplaySummary, expected: Option<&Hash>) -> Result<()> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let expected = hex::encode(expected);
    if summary.state_root != expected {
        error!(expected = %expected, actual = %summary.state_root, "State root mismatch");
        bail!(
            "state root mismatch: expected {expected}, got {}",
            summary.state_root
        );
    }
    info!(state_root = %expected, "State root matches");
    Ok(())
}

//! # Game Call Payloads
//!
//! The write surface exposed to the relay/ledger collaborator. Each variant is
//! one named operation; the caller identity comes from the envelope.
//!
//! ## Canonical Encoding
//!
//! ```text
//! CALL_DOMAIN || tag:u8 || fields
//!
//!   0x01 resetGame  delegate:[u8; 32]
//!   0x02 addTile    row:i64 BE, col:i64 BE
//!   0x03 moveUp
//!   0x04 moveDown
//!   0x05 moveLeft
//!   0x06 moveRight
//! ```

use crate::entities::Identity;
use serde::{Deserialize, Serialize};

/// Domain separator prefixed to every signed call encoding.
pub const CALL_DOMAIN: &[u8] = b"g48/call/v1";

/// A single write-surface operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum GameCall {
    /// Start a new game and install `delegate` as the session key.
    ResetGame {
        /// Identity authorised to act for the owner during the new game.
        delegate: Identity,
    },
    /// Place an exponent-1 tile at `(row, col)`.
    AddTile {
        /// Target row, must be in `[0, 4)`.
        row: i64,
        /// Target column, must be in `[0, 4)`.
        col: i64,
    },
    /// Slide toward row 0.
    MoveUp,
    /// Slide toward row 3.
    MoveDown,
    /// Slide toward column 0.
    MoveLeft,
    /// Slide toward column 3.
    MoveRight,
}

impl GameCall {
    /// Operation name as exposed on the write surface.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameCall::ResetGame { .. } => "resetGame",
            GameCall::AddTile { .. } => "addTile",
            GameCall::MoveUp => "moveUp",
            GameCall::MoveDown => "moveDown",
            GameCall::MoveLeft => "moveLeft",
            GameCall::MoveRight => "moveRight",
        }
    }

    fn tag(&self) -> u8 {
        match self {
            GameCall::ResetGame { .. } => 0x01,
            GameCall::AddTile { .. } => 0x02,
            GameCall::MoveUp => 0x03,
            GameCall::MoveDown => 0x04,
            GameCall::MoveLeft => 0x05,
            GameCall::MoveRight => 0x06,
        }
    }

    /// Canonical byte encoding, domain separator included.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CALL_DOMAIN.len() + 1 + 32);
        out.extend_from_slice(CALL_DOMAIN);
        out.push(self.tag());
        match self {
            GameCall::ResetGame { delegate } => out.extend_from_slice(delegate.as_bytes()),
            GameCall::AddTile { row, col } => {
                out.extend_from_slice(&row.to_be_bytes());
                out.extend_from_slice(&col.to_be_bytes());
            }
            GameCall::MoveUp | GameCall::MoveDown | GameCall::MoveLeft | GameCall::MoveRight => {}
        }
        out
    }
}

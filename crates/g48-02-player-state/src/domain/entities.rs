//! # Player Record
//!
//! The only stateful entity of the game. Boards, moves and tile requests are
//! values consumed and produced by the board engine.

use g48_01_board_engine::{Direction, PackedBoard, TilePosition};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use shared_types::{Hash, Identity};

/// Length of [`PlayerRecord::encode`].
pub const RECORD_ENCODING_LEN: usize = 32 + 32 + 8 + 8 + 8;

/// Persistent per-owner game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    /// Identity that created the record. Never changes.
    pub owner_key: Identity,
    /// Identity currently allowed to act for the owner.
    pub session_key: Identity,
    /// Current packed board.
    pub board: PackedBoard,
    /// Best score over all finished games.
    pub max_score: u64,
    /// Number of resets so far.
    pub game_count: u64,
}

impl PlayerRecord {
    /// The record an untouched identity reads as.
    #[must_use]
    pub fn fresh(owner: Identity) -> Self {
        Self {
            owner_key: owner,
            session_key: owner,
            board: PackedBoard::EMPTY,
            max_score: 0,
            game_count: 0,
        }
    }

    /// True once the owner has started at least one game.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.game_count > 0
    }

    /// True if the session key points at someone other than the owner.
    #[must_use]
    pub fn is_delegated(&self) -> bool {
        self.session_key != self.owner_key
    }

    /// Record after `resetGame(delegate)`.
    ///
    /// The board being discarded is scored before it is cleared.
    #[must_use]
    pub fn reset(self, delegate: Identity) -> Self {
        Self {
            session_key: delegate,
            board: PackedBoard::EMPTY,
            max_score: self.max_score.max(self.board.score()),
            game_count: self.game_count.saturating_add(1),
            ..self
        }
    }

    /// Record after placing a tile at `pos`.
    #[must_use]
    pub fn with_tile(self, pos: TilePosition) -> Self {
        Self {
            board: self.board.with_tile(pos),
            ..self
        }
    }

    /// Record after sliding toward `direction`.
    #[must_use]
    pub fn slid(self, direction: Direction) -> Self {
        Self {
            board: self.board.slide(direction),
            ..self
        }
    }

    /// Canonical byte encoding: `owner ‖ session ‖ board ‖ max_score ‖ game_count`,
    /// integers big-endian.
    #[must_use]
    pub fn encode(&self) -> [u8; RECORD_ENCODING_LEN] {
        let mut out = [0u8; RECORD_ENCODING_LEN];
        out[0..32].copy_from_slice(self.owner_key.as_bytes());
        out[32..64].copy_from_slice(self.session_key.as_bytes());
        out[64..72].copy_from_slice(&self.board.raw().to_be_bytes());
        out[72..80].copy_from_slice(&self.max_score.to_be_bytes());
        out[80..88].copy_from_slice(&self.game_count.to_be_bytes());
        out
    }

    /// Keccak-256 of [`PlayerRecord::encode`].
    #[must_use]
    pub fn commitment(&self) -> Hash {
        let digest = Keccak256::digest(self.encode());
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }
}

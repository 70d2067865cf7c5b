//! # Player State Errors
//!
//! Every rejection raised by the controller or its store.

use g48_01_board_engine::BoardError;
use shared_types::{EnvelopeError, Identity};
use thiserror::Error;

/// Rejections surfaced by the game controller. Every variant is raised
/// before the target record is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Caller is neither the record's owner nor its session key.
    #[error("Unauthorized caller {caller} for record owned by {owner}")]
    Unauthorized { caller: Identity, owner: Identity },

    /// Tile position outside the board.
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// The record store failed to read or commit.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Call envelope signature did not verify.
    #[error("Invalid call signature: {0}")]
    InvalidSignature(#[from] EnvelopeError),
}

/// Failures of a `PlayerStore` backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend-specific failure, described by the adapter.
    #[error("Store backend error: {0}")]
    Backend(String),
}

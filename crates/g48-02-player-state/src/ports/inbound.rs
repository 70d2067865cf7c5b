//! # Inbound Ports
//!
//! The write and read surface exposed to the ledger and to query clients.

use crate::domain::{GameError, Hash, PlayerRecord};
use crate::events::GameEvent;
use g48_01_board_engine::{Direction, PackedBoard};
use shared_types::Identity;

/// Game API - inbound port.
///
/// The target record of every write is resolved from `caller` alone.
pub trait GameApi: Send + Sync {
    /// Clears the board, installs `delegate` as session key and scores the
    /// replaced board.
    fn reset_game(&self, caller: Identity, delegate: Identity) -> Result<GameEvent, GameError>;

    /// Places an exponent-1 tile at `(row, col)`.
    fn add_tile(&self, caller: Identity, row: i64, col: i64) -> Result<GameEvent, GameError>;

    /// Slides the board toward `direction`.
    fn move_board(&self, caller: Identity, direction: Direction) -> Result<GameEvent, GameError>;

    /// `moveUp`
    fn move_up(&self, caller: Identity) -> Result<GameEvent, GameError> {
        self.move_board(caller, Direction::Up)
    }

    /// `moveDown`
    fn move_down(&self, caller: Identity) -> Result<GameEvent, GameError> {
        self.move_board(caller, Direction::Down)
    }

    /// `moveLeft`
    fn move_left(&self, caller: Identity) -> Result<GameEvent, GameError> {
        self.move_board(caller, Direction::Left)
    }

    /// `moveRight`
    fn move_right(&self, caller: Identity) -> Result<GameEvent, GameError> {
        self.move_board(caller, Direction::Right)
    }

    /// Record for `owner`; the fresh default when untouched.
    fn record(&self, owner: &Identity) -> Result<PlayerRecord, GameError>;

    /// Root over every stored record.
    fn state_root(&self) -> Result<Hash, GameError>;

    /// Current board of `owner`.
    fn board(&self, owner: &Identity) -> Result<PackedBoard, GameError> {
        Ok(self.record(owner)?.board)
    }

    /// Best finished-game score of `owner`.
    fn max_score(&self, owner: &Identity) -> Result<u64, GameError> {
        Ok(self.record(owner)?.max_score)
    }

    /// Number of resets by `owner`.
    fn game_count(&self, owner: &Identity) -> Result<u64, GameError> {
        Ok(self.record(owner)?.game_count)
    }

    /// Identity currently acting for `owner`.
    fn session_key(&self, owner: &Identity) -> Result<Identity, GameError> {
        Ok(self.record(owner)?.session_key)
    }
}

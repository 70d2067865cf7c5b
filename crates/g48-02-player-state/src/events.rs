//! # Game Events
//!
//! Outcome of every committed operation, returned to the invoking layer.

use g48_01_board_engine::{Direction, PackedBoard};
use serde::{Deserialize, Serialize};
use shared_types::Identity;

/// A committed state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GameEvent {
    /// `resetGame` started a new game.
    #[serde(rename_all = "camelCase")]
    GameReset {
        owner: Identity,
        /// Session key before the reset.
        previous_session: Identity,
        /// Session key installed by the reset.
        session: Identity,
        game_count: u64,
        max_score: u64,
    },

    /// `addTile` ran. `placed` is false when the cell was already occupied.
    #[serde(rename_all = "camelCase")]
    TilePlaced {
        owner: Identity,
        row: u8,
        col: u8,
        placed: bool,
        board: PackedBoard,
    },

    /// A move ran. `changed` is false when nothing could slide or merge.
    #[serde(rename_all = "camelCase")]
    BoardMoved {
        owner: Identity,
        direction: Direction,
        changed: bool,
        board: PackedBoard,
    },
}

impl GameEvent {
    /// Owner of the record the event was committed to.
    #[must_use]
    pub fn owner(&self) -> Identity {
        match self {
            GameEvent::GameReset { owner, .. }
            | GameEvent::TilePlaced { owner, .. }
            | GameEvent::BoardMoved { owner, .. } => *owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::BoardMoved {
            owner: Identity::new([1; 32]),
            direction: Direction::Left,
            changed: true,
            board: PackedBoard::from_raw(2),
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["event"], "boardMoved");
        assert_eq!(json["direction"], "Left");
        assert_eq!(json["board"], 2);
        assert_eq!(event.owner(), Identity::new([1; 32]));
    }
}

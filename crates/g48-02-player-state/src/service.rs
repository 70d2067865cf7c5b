//! # Game Controller
//!
//! Composes authorization, the board engine and the record store behind the
//! write surface.
//!
//! ## Target Resolution
//!
//! Calls carry no target. The record a signer acts on is, in order:
//!
//! 1. the signer's own record, once it has been reset at least once;
//! 2. the record of the owner currently delegating to the signer;
//! 3. the signer's own record (fresh when untouched).
//!
//! ## Atomicity
//!
//! Every operation loads one record, validates, computes the successor and
//! commits it with a single store write. Any rejection happens before that
//! write, so a record is either fully updated or left exactly as it was.
//! Calls for the same owner must be applied in ledger order by the caller.

use crate::domain::{
    authorize, invariant_counters_monotonic, invariant_owner_immutable,
    invariant_session_changes_on_reset, state_root, GameError, Hash, PlayerRecord,
};
use crate::events::GameEvent;
use crate::ports::{GameApi, PlayerStore};
use g48_01_board_engine::{Direction, PackedBoard, TilePosition};
use shared_types::Identity;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Controller configuration.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Reject calls whose Ed25519 signature does not verify.
    pub verify_signatures: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            verify_signatures: true,
        }
    }
}

/// A validated mutation of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `resetGame(delegate)`
    Reset { delegate: Identity },
    /// `addTile(row, col)`
    AddTile(TilePosition),
    /// `moveUp/Down/Left/Right`
    Move(Direction),
}

/// The game state machine over the record store.
pub struct GameController<S: PlayerStore> {
    store: Arc<S>,
}

impl<S: PlayerStore> GameController<S> {
    /// Create a controller over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Record a call signed by `signer` acts on.
    pub fn resolve_target(&self, signer: &Identity) -> Result<PlayerRecord, GameError> {
        if let Some(own) = self.store.load(signer)? {
            if own.is_created() {
                return Ok(own);
            }
        }
        if let Some(owner) = self.store.owner_for_delegate(signer)? {
            return self.load_or_fresh(&owner);
        }
        self.load_or_fresh(signer)
    }

    /// Every stored record, sorted by owner.
    pub fn snapshot(&self) -> Result<Vec<PlayerRecord>, GameError> {
        Ok(self.store.snapshot()?)
    }

    /// Applies `action` by `caller` to `owner`'s record.
    #[instrument(skip_all, fields(owner = %owner, caller = %caller))]
    pub fn execute(
        &self,
        owner: Identity,
        caller: Identity,
        action: Action,
    ) -> Result<GameEvent, GameError> {
        let record = self.load_or_fresh(&owner)?;
        self.apply(record, caller, action)
    }

    fn apply(
        &self,
        record: PlayerRecord,
        caller: Identity,
        action: Action,
    ) -> Result<GameEvent, GameError> {
        if !authorize(&record, &caller) {
            warn!(
                caller = %caller,
                owner = %record.owner_key,
                session = %record.session_key,
                "Rejected unauthorized caller"
            );
            return Err(GameError::Unauthorized {
                caller,
                owner: record.owner_key,
            });
        }

        let owner = record.owner_key;
        let (next, event) = match action {
            Action::Reset { delegate } => {
                let next = record.reset(delegate);
                let event = GameEvent::GameReset {
                    owner,
                    previous_session: record.session_key,
                    session: delegate,
                    game_count: next.game_count,
                    max_score: next.max_score,
                };
                (next, event)
            }
            Action::AddTile(pos) => {
                let next = record.with_tile(pos);
                let event = GameEvent::TilePlaced {
                    owner,
                    row: pos.row() as u8,
                    col: pos.col() as u8,
                    placed: next.board != record.board,
                    board: next.board,
                };
                (next, event)
            }
            Action::Move(direction) => {
                let next = record.slid(direction);
                let event = GameEvent::BoardMoved {
                    owner,
                    direction,
                    changed: next.board != record.board,
                    board: next.board,
                };
                (next, event)
            }
        };

        debug_assert!(invariant_owner_immutable(&record, &next));
        debug_assert!(invariant_counters_monotonic(&record, &next));
        debug_assert!(invariant_session_changes_on_reset(&record, &next));

        self.store.commit(next)?;

        match &event {
            GameEvent::GameReset {
                session,
                previous_session,
                game_count,
                max_score,
                ..
            } => {
                info!(
                    owner = %owner,
                    session = %session,
                    game_count,
                    max_score,
                    "Game reset"
                );
                if session != previous_session {
                    info!(
                        owner = %owner,
                        from = %previous_session,
                        to = %session,
                        "Session key changed"
                    );
                }
            }
            GameEvent::TilePlaced {
                row, col, placed, ..
            } => {
                debug!(owner = %owner, row, col, placed, "Tile added");
            }
            GameEvent::BoardMoved {
                direction, changed, ..
            } => {
                debug!(owner = %owner, direction = %direction, changed, "Board moved");
            }
        }

        Ok(event)
    }

    fn load_or_fresh(&self, owner: &Identity) -> Result<PlayerRecord, GameError> {
        Ok(self
            .store
            .load(owner)?
            .unwrap_or_else(|| PlayerRecord::fresh(*owner)))
    }
}

impl<S: PlayerStore> GameApi for GameController<S> {
    #[instrument(skip_all, fields(caller = %caller))]
    fn reset_game(&self, caller: Identity, delegate: Identity) -> Result<GameEvent, GameError> {
        let record = self.resolve_target(&caller)?;
        self.apply(record, caller, Action::Reset { delegate })
    }

    #[instrument(skip_all, fields(caller = %caller, row = row, col = col))]
    fn add_tile(&self, caller: Identity, row: i64, col: i64) -> Result<GameEvent, GameError> {
        let pos = TilePosition::new(row, col).map_err(|e| {
            warn!(caller = %caller, row, col, "Rejected tile outside the board");
            GameError::from(e)
        })?;
        let record = self.resolve_target(&caller)?;
        self.apply(record, caller, Action::AddTile(pos))
    }

    #[instrument(skip_all, fields(caller = %caller, direction = %direction))]
    fn move_board(&self, caller: Identity, direction: Direction) -> Result<GameEvent, GameError> {
        let record = self.resolve_target(&caller)?;
        self.apply(record, caller, Action::Move(direction))
    }

    fn record(&self, owner: &Identity) -> Result<PlayerRecord, GameError> {
        self.load_or_fresh(owner)
    }

    fn state_root(&self) -> Result<Hash, GameError> {
        Ok(state_root(&self.snapshot()?))
    }

    fn board(&self, owner: &Identity) -> Result<PackedBoard, GameError> {
        Ok(self.load_or_fresh(owner)?.board)
    }
}

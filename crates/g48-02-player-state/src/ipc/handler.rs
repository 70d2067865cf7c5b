//! # Signed Call Handler
//!
//! Verifies a `SignedCall` envelope and dispatches it to the controller.
//!
//! ## Security
//!
//! - The envelope signer is the caller; payloads carry no caller identity.
//! - The signature covers `GameCall::encode()` and is checked before any
//!   record is read.

use crate::domain::GameError;
use crate::events::GameEvent;
use crate::ports::{GameApi, PlayerStore};
use crate::service::{ControllerConfig, GameController};
use shared_types::{GameCall, SignedCall};
use tracing::{instrument, warn};

/// Dispatches signed calls to a [`GameController`].
pub struct CallHandler<S: PlayerStore> {
    controller: GameController<S>,
    config: ControllerConfig,
}

impl<S: PlayerStore> CallHandler<S> {
    pub fn new(controller: GameController<S>, config: ControllerConfig) -> Self {
        Self { controller, config }
    }

    pub fn controller(&self) -> &GameController<S> {
        &self.controller
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Verifies and applies one call.
    #[instrument(skip_all, fields(signer = %call.signer, op = call.call.name()))]
    pub fn handle(&self, call: &SignedCall) -> Result<GameEvent, GameError> {
        if self.config.verify_signatures {
            call.verify().map_err(|e| {
                warn!(signer = %call.signer, error = %e, "Rejected call with bad signature");
                GameError::from(e)
            })?;
        }

        let caller = call.signer;
        match call.call {
            GameCall::ResetGame { delegate } => self.controller.reset_game(caller, delegate),
            GameCall::AddTile { row, col } => self.controller.add_tile(caller, row, col),
            GameCall::MoveUp => self.controller.move_up(caller),
            GameCall::MoveDown => self.controller.move_down(caller),
            GameCall::MoveLeft => self.controller.move_left(caller),
            GameCall::MoveRight => self.controller.move_right(caller),
        }
    }
}

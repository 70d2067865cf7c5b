//! Deterministic players and a fresh node for integration flows.

use std::sync::Arc;

use ed25519_dalek::SigningKey;
use g48_02_player_state::{
    CallHandler, ControllerConfig, GameController, GameError, GameEvent, InMemoryPlayerStore,
};
use shared_types::{GameCall, Identity, SignedCall};

/// The L-shaped opening used by the board scenarios.
pub const L_SHAPE: [(i64, i64); 7] = [(0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (0, 3)];

/// A signing identity derived from a fixed seed.
pub struct Player {
    key: SigningKey,
}

impl Player {
    pub fn new(seed: u8) -> Self {
        Self {
            key: SigningKey::from_bytes(&[seed; 32]),
        }
    }

    pub fn id(&self) -> Identity {
        Identity::from_verifying_key(&self.key.verifying_key())
    }

    pub fn sign(&self, call: GameCall) -> SignedCall {
        SignedCall::sign(&self.key, call)
    }
}

/// Signature-checking handler over an empty in-memory store.
pub fn node() -> CallHandler<InMemoryPlayerStore> {
    CallHandler::new(
        GameController::new(Arc::new(InMemoryPlayerStore::new())),
        ControllerConfig::default(),
    )
}

/// Signs and submits `call` as `player`.
pub fn submit(
    node: &CallHandler<InMemoryPlayerStore>,
    player: &Player,
    call: GameCall,
) -> Result<GameEvent, GameError> {
    node.handle(&player.sign(call))
}

/// Places the L-shape opening as `player`.
pub fn place_l_shape(
    node: &CallHandler<InMemoryPlayerStore>,
    player: &Player,
) -> Result<(), GameError> {
    for (row, col) in L_SHAPE {
        submit(node, player, GameCall::AddTile { row, col })?;
    }
    Ok(())
}

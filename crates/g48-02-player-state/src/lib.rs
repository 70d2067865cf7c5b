//! # g48-02-player-state
//!
//! Player State subsystem for Verifiable-2048.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: one `PlayerRecord` per owner identity
//! - **Authorization Gate**: owner or current session delegate, nobody else
//! - **Game Controller**: the only surface invoked by the ledger
//!
//! ## Call Flow
//!
//! ```text
//! [Ledger] ──SignedCall──→ [CallHandler]
//!                               │ verify Ed25519 signature
//!                               ↓
//!                        [GameController] ── resolve target record
//!                               │ authorize(record, caller)
//!                               ↓
//!                        [Board Engine (1)] ── add_tile / slide
//!                               │
//!                               ↓
//!                        [PlayerStore] ── commit ──→ GameEvent
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Rejected calls never mutate a record | `service.rs` - validate, then a single `commit()` |
//! | `game_count` grows by exactly 1 per reset | `domain/entities.rs` - `PlayerRecord::reset()` |
//! | `max_score` never decreases | `domain/entities.rs` - `PlayerRecord::reset()` |
//! | `owner_key` never changes | `domain/invariants.rs` - `invariant_owner_immutable()` |
//! | A replaced delegate loses access | `adapters/memory_store.rs` - delegate index |

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ipc;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use events::*;
pub use ipc::*;
pub use ports::*;
pub use service::{Action, ControllerConfig, GameController};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

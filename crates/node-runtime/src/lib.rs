//! # Node Runtime Library
//!
//! Exposes the replay pipeline behind the `g48-node` binary for testing.
//!
//! ## Pipeline
//!
//! ```text
//! call log (JSON lines) ──→ SignedCall ──→ CallHandler ──→ InMemoryPlayerStore
//!                                                              │
//!                                           ReplaySummary ←────┘ snapshot + state root
//! ```

pub mod config;
pub mod replay;

pub use config::{ConfigError, NodeConfig};
pub use replay::{check_root, replay, ReplaySummary};

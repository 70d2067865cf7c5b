//! # Shared Types Crate
//!
//! Types shared by every crate that touches the game ledger surface.
//!
//! ## Design Principles
//!
//! - **Envelope Identity**: A call carries no target identity of its own. The
//!   signer of the `SignedCall` envelope is the sole source of the caller's
//!   identity, and the target record is resolved from it.
//! - **Canonical Encoding**: Signatures cover a fixed byte encoding of the call
//!   (see [`GameCall::encode`]), never a serde rendering.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod ipc;

pub use entities::*;
pub use envelope::SignedCall;
pub use errors::*;
pub use ipc::*;

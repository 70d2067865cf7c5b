//! # Domain Layer
//!
//! Player records, the authorization gate and state commitments.

pub mod auth;
pub mod commitment;
pub mod entities;
pub mod errors;
pub mod invariants;

pub use auth::*;
pub use commitment::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;

pub use shared_types::{Hash, Identity, ZERO_HASH};

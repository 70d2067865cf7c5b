//! # Domain Module
//!
//! Core board types and the constant-shape selection primitives.

pub mod board;
pub mod errors;
pub mod invariants;
pub mod select;
pub mod value_objects;

pub use board::*;
pub use errors::*;
pub use invariants::*;
pub use value_objects::*;

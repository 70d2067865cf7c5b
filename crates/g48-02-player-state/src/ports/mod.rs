//! # Ports
//!
//! - `inbound`: the game surface the ledger drives
//! - `outbound`: record persistence

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

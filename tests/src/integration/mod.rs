//! Cross-crate flows: shared-types envelopes → player state → board engine.

pub mod delegation;
pub mod fixtures;
pub mod game_flows;

//! # IPC Layer
//!
//! Entry point for signed calls arriving from the ledger.

pub mod handler;

pub use handler::CallHandler;

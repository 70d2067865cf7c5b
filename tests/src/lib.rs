//! # Verifiable-2048 Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Signed calls driven end to end through the controller
//! │   ├── fixtures.rs
//! │   ├── game_flows.rs
//! │   └── delegation.rs
//! └── benches/           # criterion benchmarks for the board engine
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p g48-tests
//! cargo test -p g48-tests integration::delegation
//! cargo bench -p g48-tests
//! ```

pub mod integration;

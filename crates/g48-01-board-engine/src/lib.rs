//! # G48-01 Board Engine
//!
//! Packed 4×4 board encoding and the directional slide/merge transition.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (pure domain, no ports)
//!
//! ## Purpose
//!
//! Every transition here must be recomputable by any party holding the prior
//! board, so the engine is a fixed-cost computation:
//!
//! - No data-dependent branching: decisions are `subtle::Choice` values fed to
//!   constant-time selects.
//! - No variable-length loops: every loop has a constant trip count (16 cells,
//!   4 lines, 4 positions).
//!
//! ## Board Layout
//!
//! ```text
//! bit offset = row * 16 + col * 4
//!
//!   row 0: nibbles 0..4    (bits  0..16)
//!   row 1: nibbles 4..8    (bits 16..32)
//!   row 2: nibbles 8..12   (bits 32..48)
//!   row 3: nibbles 12..16  (bits 48..64)
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Every nibble ≤ 15 | `algorithms/transition.rs` - saturated pairs never merge |
//! | Occupied cells are never overwritten | `algorithms/transition.rs` - `add_tile` |
//! | At most two merges per line | `algorithms/transition.rs` - `merge_line` |
//! | Slide conserves tile value | `domain/invariants.rs` - `invariant_value_conserved()` |
//! | Slide with nothing to move is the identity | `domain/invariants.rs` - `invariant_slide_fixed_point()` |
//!
//! ## Module Structure
//!
//! ```text
//! g48-01-board-engine/
//! ├── domain/          # PackedBoard, Direction, TilePosition, errors, select primitives
//! └── algorithms/      # codec (pack/unpack), transition (add_tile/slide), score
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;

// Re-exports
pub use algorithms::{add_tile, max_exponent, pack, score, slide, try_pack, unpack};
pub use domain::{
    has_slide_work, invariant_occupancy_non_increasing, invariant_slide_fixed_point,
    invariant_value_conserved, BoardError, Direction, Grid, PackedBoard, TilePosition,
    BOARD_SIZE, CELL_COUNT, MAX_EXPONENT,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

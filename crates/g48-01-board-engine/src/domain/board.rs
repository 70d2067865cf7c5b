//! # Packed Board
//!
//! The canonical 64-bit board. The packed integer is the sole persisted form;
//! grids exist only transiently through the codec.

use super::errors::BoardError;
use super::value_objects::{Direction, Grid, TilePosition, BOARD_SIZE};
use crate::algorithms::{codec, score as scoring, transition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Packed 4×4 board: 16 nibbles, row-major, row 0 in the low-order bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedBoard(u64);

impl PackedBoard {
    /// The empty board.
    pub const EMPTY: PackedBoard = PackedBoard(0);

    /// Wraps a raw wire value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw wire value.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Exponent at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        codec::read_cell(*self, row, col)
    }

    /// Unpacked grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        codec::unpack(*self)
    }

    /// Packs a grid; exponents are truncated to their low nibble.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        codec::pack(grid)
    }

    /// Packs a grid, rejecting exponents above 15.
    pub fn try_from_grid(grid: &Grid) -> Result<Self, BoardError> {
        codec::try_pack(grid)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.to_grid()
            .iter()
            .flatten()
            .filter(|e| **e == 0)
            .count()
    }

    /// Largest exponent on the board (0 when empty).
    #[must_use]
    pub fn max_exponent(&self) -> u8 {
        scoring::max_exponent(*self)
    }

    /// Score implied by the tiles on the board.
    #[must_use]
    pub fn score(&self) -> u64 {
        scoring::score(*self)
    }

    /// Board after placing an exponent-1 tile at `pos` (no-op if occupied).
    #[must_use]
    pub fn with_tile(self, pos: TilePosition) -> Self {
        transition::add_tile(self, pos)
    }

    /// Board after sliding toward `direction`.
    #[must_use]
    pub fn slide(self, direction: Direction) -> Self {
        transition::slide(self, direction)
    }
}

impl From<u64> for PackedBoard {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<PackedBoard> for u64 {
    fn from(board: PackedBoard) -> Self {
        board.0
    }
}

impl fmt::Debug for PackedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedBoard({:#018x})", self.0)
    }
}

/// Renders tile values (not exponents), one row per line.
impl fmt::Display for PackedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.to_grid();
        for (r, row) in grid.iter().enumerate() {
            for (c, exponent) in row.iter().enumerate() {
                if *exponent == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", 1u32 << exponent)?;
                }
                if c + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

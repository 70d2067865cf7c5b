//! # Value Objects
//!
//! Board dimensions, move directions and validated tile positions.

use super::errors::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Largest exponent a nibble can hold.
pub const MAX_EXPONENT: u8 = 15;

/// Unpacked board: `grid[row][col]` holds the cell exponent, 0 = empty.
pub type Grid = [[u8; BOARD_SIZE]; BOARD_SIZE];

/// Direction in which tiles slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 3.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 3.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Board coordinates of position `j` (0 = trailing edge) on line `line`.
    ///
    /// Rows are lines for Left/Right, columns for Up/Down. The trailing edge
    /// is the one tiles move toward.
    #[must_use]
    pub const fn cell(self, line: usize, j: usize) -> (usize, usize) {
        match self {
            Direction::Left => (line, j),
            Direction::Right => (line, BOARD_SIZE - 1 - j),
            Direction::Up => (j, line),
            Direction::Down => (BOARD_SIZE - 1 - j, line),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A cell coordinate known to lie on the board.
///
/// Only constructible through [`TilePosition::new`], so it has no
/// `Deserialize` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TilePosition {
    row: u8,
    col: u8,
}

impl TilePosition {
    /// Validates `(row, col)` against `[0, 4)`.
    pub fn new(row: i64, col: i64) -> Result<Self, BoardError> {
        let size = BOARD_SIZE as i64;
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(BoardError::InvalidCell { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Row index.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row as usize
    }

    /// Column index.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col as usize
    }

    /// Row-major nibble index, `row * 4 + col`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }
}

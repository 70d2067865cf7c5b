//! # Board Codec
//!
//! Packs a 4×4 grid of exponents into one `u64` and back.
//!
//! Cell `(row, col)` occupies the nibble at bit offset `row * 16 + col * 4`,
//! equivalently nibble index `row * 4 + col`. Every other module reads and
//! writes cells through this file only.

use crate::domain::{BoardError, Grid, PackedBoard, BOARD_SIZE, CELL_COUNT, MAX_EXPONENT};

const NIBBLE_BITS: usize = 4;
const NIBBLE_MASK: u64 = 0xF;

/// Bit offset of cell `(row, col)`.
#[inline]
#[must_use]
pub const fn nibble_offset(row: usize, col: usize) -> usize {
    row * BOARD_SIZE * NIBBLE_BITS + col * NIBBLE_BITS
}

/// Exponent stored at `(row, col)`.
#[inline]
#[must_use]
pub fn read_cell(board: PackedBoard, row: usize, col: usize) -> u8 {
    ((board.raw() >> nibble_offset(row, col)) & NIBBLE_MASK) as u8
}

/// All 16 exponents in nibble order.
#[must_use]
pub fn cells(board: PackedBoard) -> [u8; CELL_COUNT] {
    let raw = board.raw();
    let mut out = [0u8; CELL_COUNT];
    for (i, cell) in out.iter_mut().enumerate() {
        *cell = ((raw >> (i * NIBBLE_BITS)) & NIBBLE_MASK) as u8;
    }
    out
}

/// Packs 16 exponents given in nibble order. Values are masked to 4 bits.
#[must_use]
pub fn from_cells(cells: &[u8; CELL_COUNT]) -> PackedBoard {
    let raw = cells.iter().enumerate().fold(0u64, |acc, (i, cell)| {
        acc | ((u64::from(*cell) & NIBBLE_MASK) << (i * NIBBLE_BITS))
    });
    PackedBoard::from_raw(raw)
}

/// Packs `grid`. Total: exponents above 15 are truncated to their low nibble;
/// use [`try_pack`] to reject them instead.
#[must_use]
pub fn pack(grid: &Grid) -> PackedBoard {
    let mut raw = 0u64;
    for (row, line) in grid.iter().enumerate() {
        for (col, exponent) in line.iter().enumerate() {
            raw |= (u64::from(*exponent) & NIBBLE_MASK) << nibble_offset(row, col);
        }
    }
    PackedBoard::from_raw(raw)
}

/// Packs `grid`, rejecting any exponent that does not fit in a nibble.
pub fn try_pack(grid: &Grid) -> Result<PackedBoard, BoardError> {
    for (row, line) in grid.iter().enumerate() {
        for (col, exponent) in line.iter().enumerate() {
            if *exponent > MAX_EXPONENT {
                return Err(BoardError::ExponentOutOfRange {
                    row,
                    col,
                    exponent: *exponent,
                });
            }
        }
    }
    Ok(pack(grid))
}

/// Unpacks a board into `grid[row][col]`.
#[must_use]
pub fn unpack(board: PackedBoard) -> Grid {
    let mut grid = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in grid.iter_mut().enumerate() {
        for (col, exponent) in line.iter_mut().enumerate() {
            *exponent = read_cell(board, row, col);
        }
    }
    grid
}

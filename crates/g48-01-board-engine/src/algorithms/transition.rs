//! # Transition Engine
//!
//! `add_tile` and `slide` over the packed board.
//!
//! Both functions have a fixed shape: `add_tile` visits all 16 cells,
//! `slide` processes all 4 lines through the same compact → merge → compact
//! network. Data only ever flows into `select_*`, never into a branch or a
//! loop bound.

use super::codec;
use crate::domain::select::{equals, is_zero, select_u8};
use crate::domain::{Direction, PackedBoard, TilePosition, BOARD_SIZE, CELL_COUNT, MAX_EXPONENT};

/// One line, index 0 at the trailing edge.
type Line = [u8; BOARD_SIZE];

/// Places an exponent-1 tile at `pos`. An occupied target leaves the board
/// unchanged.
#[must_use]
pub fn add_tile(board: PackedBoard, pos: TilePosition) -> PackedBoard {
    let target = pos.index() as u8;
    let mut cells = codec::cells(board);
    for (i, cell) in cells.iter_mut().enumerate() {
        let place = equals(i as u8, target) & is_zero(*cell);
        *cell = select_u8(place, 1, *cell);
    }
    codec::from_cells(&cells)
}

/// Slides every line toward `direction`, merging equal neighbours once.
#[must_use]
pub fn slide(board: PackedBoard, direction: Direction) -> PackedBoard {
    let source = codec::cells(board);
    let mut out = [0u8; CELL_COUNT];

    for line_idx in 0..BOARD_SIZE {
        let mut line: Line = [0; BOARD_SIZE];
        for (j, value) in line.iter_mut().enumerate() {
            let (row, col) = direction.cell(line_idx, j);
            *value = source[row * BOARD_SIZE + col];
        }

        let line = slide_line(line);

        for (j, value) in line.iter().enumerate() {
            let (row, col) = direction.cell(line_idx, j);
            out[row * BOARD_SIZE + col] = *value;
        }
    }

    codec::from_cells(&out)
}

/// Compact, merge, compact.
pub(crate) fn slide_line(line: Line) -> Line {
    compact_line(merge_line(compact_line(line)))
}

/// Moves tiles toward index 0 preserving order, zeros to the back.
///
/// Three bubble passes of three compare-and-select steps: each step swaps a
/// gap with its right neighbour.
fn compact_line(mut line: Line) -> Line {
    for _ in 0..BOARD_SIZE - 1 {
        for i in 0..BOARD_SIZE - 1 {
            let gap = is_zero(line[i]);
            let (here, next) = (line[i], line[i + 1]);
            line[i] = select_u8(gap, next, here);
            line[i + 1] = select_u8(gap, 0, next);
        }
    }
    line
}

/// Merges equal non-zero neighbours scanning from index 0.
///
/// A merge zeroes the right cell, so the next pair cannot reuse it. Pairs at
/// `MAX_EXPONENT` never merge.
fn merge_line(mut line: Line) -> Line {
    for i in 0..BOARD_SIZE - 1 {
        let (here, next) = (line[i], line[i + 1]);
        let merge = !is_zero(here) & equals(here, next) & !equals(here, MAX_EXPONENT);
        line[i] = select_u8(merge, here + 1, here);
        line[i + 1] = select_u8(merge, 0, next);
    }
    line
}

//! # Domain Invariants
//!
//! Properties every slide must satisfy. These are checked by tests and by the
//! player-state crate in debug builds; they are deliberately written with
//! ordinary branching, independently of the constant-shape engine.

use super::board::PackedBoard;
use super::value_objects::{Direction, BOARD_SIZE, MAX_EXPONENT};

/// Invariant: sliding conserves the sum of tile values.
///
/// Merging two `2^e` tiles yields one `2^(e+1)` tile, so the total never
/// changes.
#[must_use]
pub fn invariant_value_conserved(before: PackedBoard, after: PackedBoard) -> bool {
    tile_sum(before) == tile_sum(after)
}

/// Invariant: sliding never creates tiles.
#[must_use]
pub fn invariant_occupancy_non_increasing(before: PackedBoard, after: PackedBoard) -> bool {
    after.empty_cells() >= before.empty_cells()
}

/// Invariant: a board with nothing to compact or merge toward `direction` is
/// a fixed point of `slide`.
#[must_use]
pub fn invariant_slide_fixed_point(board: PackedBoard, direction: Direction) -> bool {
    if has_slide_work(board, direction) {
        return true;
    }
    board.slide(direction) == board
}

/// True if some line has a gap before a tile, or two equal mergeable
/// neighbours once gaps are ignored.
#[must_use]
pub fn has_slide_work(board: PackedBoard, direction: Direction) -> bool {
    (0..BOARD_SIZE).any(|line| {
        let values: Vec<u8> = (0..BOARD_SIZE)
            .map(|j| {
                let (r, c) = direction.cell(line, j);
                board.cell(r, c)
            })
            .collect();

        let first_gap = values.iter().position(|v| *v == 0);
        let gap_before_tile =
            first_gap.is_some_and(|gap| values[gap..].iter().any(|v| *v != 0));

        let tiles: Vec<u8> = values.into_iter().filter(|v| *v != 0).collect();
        let mergeable = tiles
            .windows(2)
            .any(|pair| pair[0] == pair[1] && pair[0] < MAX_EXPONENT);

        gap_before_tile || mergeable
    })
}

fn tile_sum(board: PackedBoard) -> u64 {
    board
        .to_grid()
        .iter()
        .flatten()
        .filter(|e| **e > 0)
        .map(|e| 1u64 << e)
        .sum()
}

//! # Board Score
//!
//! Tiles only ever enter the board at exponent 1, so a tile of exponent `e`
//! was built from `2^(e-1)` spawns through merges worth `(e - 1) * 2^e`
//! points in total. The score of a board is the sum over its cells; empty and
//! exponent-1 cells contribute nothing.

use super::codec;
use crate::domain::select::select_u8;
use crate::domain::PackedBoard;
use subtle::ConstantTimeGreater;

/// Points accumulated to build every tile on `board`.
#[must_use]
pub fn score(board: PackedBoard) -> u64 {
    codec::cells(board).iter().map(|e| tile_score(*e)).sum()
}

/// Largest exponent on `board`, 0 when empty.
#[must_use]
pub fn max_exponent(board: PackedBoard) -> u8 {
    codec::cells(board)
        .iter()
        .fold(0u8, |best, e| select_u8(e.ct_gt(&best), *e, best))
}

#[inline]
fn tile_score(exponent: u8) -> u64 {
    let e = u64::from(exponent);
    e.saturating_sub(1) << e
}

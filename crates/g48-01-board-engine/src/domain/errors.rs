//! # Domain Errors
//!
//! Error types for the board engine.

use thiserror::Error;

/// Board engine error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Target cell lies outside the 4×4 grid.
    #[error("Invalid cell: ({row}, {col}) is outside [0, 4)")]
    InvalidCell {
        /// Requested row
        row: i64,
        /// Requested column
        col: i64,
    },

    /// Grid value does not fit in a nibble.
    #[error("Exponent out of range at ({row}, {col}): {exponent} > 15")]
    ExponentOutOfRange {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// Offending exponent
        exponent: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cell_error() {
        let err = BoardError::InvalidCell { row: 4, col: -1 };
        assert!(err.to_string().contains("(4, -1)"));
    }

    #[test]
    fn test_exponent_out_of_range_error() {
        let err = BoardError::ExponentOutOfRange {
            row: 1,
            col: 2,
            exponent: 16,
        };
        assert!(err.to_string().contains("16"));
    }
}

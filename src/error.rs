//! Input-validation errors shared by the solvers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A square index outside `[0, 64)`.
    #[error("square index {value} is off the board (expected 0..64)")]
    SquareOutOfRange { value: i64 },

    /// A payment target below 1.
    #[error("payment total must be >= 1, got {total}")]
    InvalidPaymentTotal { total: i64 },
}

//! Error types for densemat

use thiserror::Error;

/// Result type alias using densemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures that densemat operations report to the caller
///
/// Programmer errors (out-of-bounds indexing, dimension mismatches in the
/// arithmetic operators, reshaping to a different cell count) are not
/// represented here: they panic at the violation site.
#[derive(Error, Debug)]
pub enum Error {
    /// Linear system has no unique solution
    #[error("No unique solution: coefficient determinant {det} is below the solvability threshold")]
    NoUniqueSolution {
        /// Determinant of the coefficient matrix
        det: f64,
    },

    /// Nested rows of unequal length passed to a constructor
    #[error("Ragged input: row {row} has length {got}, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row, which fixes the column count
        expected: usize,
        /// Actual length of the offending row
        got: usize,
    },
}

impl Error {
    /// Create a no-unique-solution error
    pub fn no_unique_solution(det: f64) -> Self {
        Self::NoUniqueSolution { det }
    }

    /// Create a ragged-rows error
    pub fn ragged_rows(row: usize, expected: usize, got: usize) -> Self {
        Self::RaggedRows { row, expected, got }
    }
}

//! Error types for the absorbing-linalg crate.

use absorbing_integers::ArithmeticError;

/// Error type for all fallible matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinalgError {
    /// Operand shapes are incompatible with the requested operation.
    #[error("dimension mismatch in {operation}: {detail}")]
    DimensionMismatch {
        /// Name of the operation that rejected its operands.
        operation: &'static str,
        /// Description of the offending shapes.
        detail: String,
    },

    /// Gauss-Jordan elimination found no nonzero pivot.
    #[error("matrix is singular: no nonzero pivot in column {column}")]
    SingularMatrix {
        /// Zero-based pivot column that could not be eliminated.
        column: usize,
    },

    /// Exact arithmetic failed underneath a matrix operation.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

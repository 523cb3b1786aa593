//! Error types for exact arithmetic.

/// Error type for fallible integer and rational operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// A zero denominator, a zero divisor, or the reciprocal of zero.
    #[error("division by zero")]
    DivideByZero,
}

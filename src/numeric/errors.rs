// ============================================================================
// Numeric Errors
// Error types for decimal arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand or bound is NaN or infinite
    NonFiniteInput,
    /// Decomposition exceeded the i64 scaling range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NonFiniteInput => {
                write!(f, "non-finite input: operand is NaN or infinite")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeded the decimal scaling range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

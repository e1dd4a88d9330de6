// ============================================================================
// Numeric Errors
// Error types for exact fraction arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// A construction or operation would leave a zero denominator
    DivisionByZero,
    /// Reduced result does not fit in i32
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => {
                write!(f, "division by zero: fraction denominator cannot be zero")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: reduced result exceeds i32 range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

// ============================================================================
// Numeric Module
// Exact rational arithmetic on fixed-width integers
// ============================================================================
//
// This module provides:
// - Fraction: rational number kept in lowest terms with a positive denominator
// - NumericError: Error types for construction and arithmetic
//
// Design principles:
// - Canonical form after every operation (reduced, sign on the numerator)
// - Fallible paths return Result; operators panic like integer arithmetic
// - i128 intermediates, narrowed to i32 after reduction

mod errors;
mod fraction;

pub use errors::{NumericError, NumericResult};
pub use fraction::Fraction;

#[cfg(feature = "serde")]
pub use fraction::FractionParts;

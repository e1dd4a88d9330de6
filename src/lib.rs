// ============================================================================
// Exact Fraction Library
// Rational numbers in lowest terms with checked fixed-width arithmetic
// ============================================================================

//! # Exact Fraction
//!
//! An exact rational-number value type over `i32` terms.
//!
//! ## Features
//!
//! - **Canonical form**: every value is reduced to lowest terms with a
//!   positive denominator, so equality and hashing compare values
//! - **Checked arithmetic** (`checked_add`, `checked_div`, ...) returning
//!   [`NumericResult`](numeric::NumericResult)
//! - **Operator overloading** (`+ - * /`, compound assignment, in-place
//!   `increment`/`decrement`)
//! - **Formatting**: integers print bare (`2`), other values as `<frac:3/4>`
//! - **Optional serde support** behind the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use exact_fraction::prelude::*;
//!
//! let half = Fraction::new(1, 2)?;
//! let third = Fraction::new(1, 3)?;
//!
//! let sum = half + third;
//! assert_eq!(sum.to_string(), "<frac:5/6>");
//!
//! // Division by a zero fraction is an error, not a broken value
//! assert_eq!(sum.checked_div(Fraction::ZERO), Err(NumericError::DivisionByZero));
//!
//! let mut x = half;
//! x.increment();
//! assert_eq!(x.to_string(), "<frac:3/2>");
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Fraction, NumericError, NumericResult};
}

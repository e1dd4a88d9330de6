// ============================================================================
// Fraction
// Exact rational number kept in lowest terms with a positive denominator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rational number stored as an `i32` numerator over an `i32` denominator.
///
/// Every value is canonical:
/// - `gcd(|numerator|, denominator) == 1`
/// - `denominator > 0` (the sign lives on the numerator)
///
/// Because of this, derived equality and hashing compare values, not
/// representations: `1/2` and `2/4` are the same `Fraction`.
///
/// # Arithmetic
/// `checked_*` methods return `NumericResult` and are the recoverable path.
/// The `+ - * /` operators behave like integer arithmetic and panic on
/// overflow or on division by a zero fraction.
///
/// # Example
/// ```
/// use exact_fraction::numeric::Fraction;
///
/// let half = Fraction::new(1, 2)?;
/// let third = Fraction::new(1, 3)?;
/// assert_eq!((half + third).to_string(), "<frac:5/6>");
/// assert_eq!(Fraction::new(6, 3)?.to_string(), "2");
/// # Ok::<(), exact_fraction::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "FractionParts", into = "FractionParts")
)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

/// Greatest common divisor of two magnitudes (Euclid).
///
/// `gcd(0, 0) == 0`, which callers treat as a zero denominator.
const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Fraction {
    /// Zero (0/1)
    pub const ZERO: Self = Self::from_int(0);

    /// One (1/1)
    pub const ONE: Self = Self::from_int(1);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a fraction from a numerator/denominator pair.
    ///
    /// The pair is reduced to lowest terms and the sign is moved onto the
    /// numerator.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero (including `0/0`)
    /// - `Overflow` if the sign flip does not fit in i32
    ///   (e.g. `Fraction::new(1, i32::MIN)`)
    pub fn new(numerator: i32, denominator: i32) -> NumericResult<Self> {
        Self::reduce(i128::from(numerator), i128::from(denominator)).inspect_err(|err| {
            tracing::debug!(numerator, denominator, %err, "rejected fraction construction");
        })
    }

    /// Create the integer fraction `value/1`.
    ///
    /// Already in lowest terms, so no reduction takes place.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Reduce an unreduced pair, normalize its sign and narrow it to i32.
    fn reduce(numerator: i128, denominator: i128) -> NumericResult<Self> {
        let g = gcd(denominator.unsigned_abs(), numerator.unsigned_abs());
        if g == 0 {
            return Err(NumericError::DivisionByZero);
        }

        // Inputs stay far below 2^127, so g fits in i128
        let g = g as i128;
        let (mut numerator, mut denominator) = (numerator / g, denominator / g);

        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Ok(Self {
            numerator: i32::try_from(numerator).map_err(|_| NumericError::Overflow)?,
            denominator: i32::try_from(denominator).map_err(|_| NumericError::Overflow)?,
        })
    }

    #[inline]
    fn wide(self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Signed numerator in lowest terms.
    #[inline]
    pub const fn numerator(self) -> i32 {
        self.numerator
    }

    /// Denominator in lowest terms, always positive.
    #[inline]
    pub const fn denominator(self) -> i32 {
        self.denominator
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// True when the value is a whole number (denominator 1).
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition: `p/q + r/s = (s·p + q·r) / (s·q)`, then reduced.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced result does not fit in i32.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        let (p, q) = self.wide();
        let (r, s) = rhs.wide();
        Self::reduce(s * p + q * r, s * q).inspect_err(|err| {
            tracing::debug!(lhs = %self, rhs = %rhs, %err, "fraction addition failed");
        })
    }

    /// Checked subtraction: `p/q - r/s = (s·p - q·r) / (s·q)`, then reduced.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced result does not fit in i32.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        let (p, q) = self.wide();
        let (r, s) = rhs.wide();
        Self::reduce(s * p - q * r, s * q).inspect_err(|err| {
            tracing::debug!(lhs = %self, rhs = %rhs, %err, "fraction subtraction failed");
        })
    }

    /// Checked multiplication: `p/q · r/s = (p·r) / (q·s)`, then reduced.
    ///
    /// Intermediates are i128, so only the reduced result has to fit:
    /// `(i32::MAX/2) · 2` is exact.
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced result does not fit in i32.
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let (p, q) = self.wide();
        let (r, s) = rhs.wide();
        Self::reduce(p * r, q * s).inspect_err(|err| {
            tracing::debug!(lhs = %self, rhs = %rhs, %err, "fraction multiplication failed");
        })
    }

    /// Checked division: multiplication by the reciprocal,
    /// `p/q ÷ r/s = (p·s) / (q·r)`, then reduced.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the reduced result does not fit in i32
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            tracing::debug!(lhs = %self, "rejected division by a zero fraction");
            return Err(NumericError::DivisionByZero);
        }

        let (p, q) = self.wide();
        let (r, s) = rhs.wide();
        Self::reduce(p * s, q * r).inspect_err(|err| {
            tracing::debug!(lhs = %self, rhs = %rhs, %err, "fraction division failed");
        })
    }

    // ========================================================================
    // Increment / Decrement
    // ========================================================================

    /// Add one in place.
    ///
    /// # Panics
    /// Panics if the result overflows i32.
    #[inline]
    pub fn increment(&mut self) {
        *self += Self::ONE;
    }

    /// Subtract one in place.
    ///
    /// # Panics
    /// Panics if the result overflows i32.
    #[inline]
    pub fn decrement(&mut self) {
        *self -= Self::ONE;
    }

    /// The value plus one, leaving `self` untouched.
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        self + Self::ONE
    }

    /// The value minus one, leaving `self` untouched.
    #[inline]
    #[must_use]
    pub fn prev(self) -> Self {
        self - Self::ONE
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate as a floating-point number.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

// Infallible operators for ergonomics (panic like integer arithmetic - use checked_* to recover)
impl Add for Fraction {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|err| panic!("fraction addition: {err}"))
    }
}

impl Sub for Fraction {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .unwrap_or_else(|err| panic!("fraction subtraction: {err}"))
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .unwrap_or_else(|err| panic!("fraction multiplication: {err}"))
    }
}

impl Div for Fraction {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .unwrap_or_else(|err| panic!("fraction division: {err}"))
    }
}

/// Right operand by reference, left operand by value.
macro_rules! forward_ref_binop {
    ($($imp:ident $method:ident),* $(,)?) => {$(
        impl $imp<&Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: &Fraction) -> Fraction {
                $imp::$method(self, *rhs)
            }
        }
    )*};
}

forward_ref_binop!(Add add, Sub sub, Mul mul, Div div);

macro_rules! assign_binop {
    ($($imp:ident $method:ident => $op:tt),* $(,)?) => {$(
        impl $imp for Fraction {
            #[inline]
            fn $method(&mut self, rhs: Fraction) {
                *self = *self $op rhs;
            }
        }
    )*};
}

assign_binop!(
    AddAssign add_assign => +,
    SubAssign sub_assign => -,
    MulAssign mul_assign => *,
    DivAssign div_assign => /,
);

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "<frac:{}/{}>", self.numerator, self.denominator)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Convert from rust_decimal::Decimal exactly.
    ///
    /// The decimal's mantissa over `10^scale` is reduced, so `1.25` becomes
    /// `5/4`.
    ///
    /// # Errors
    /// Returns `Overflow` if either reduced term does not fit in i32.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        // scale <= 28, so 10^scale fits in i128
        let denominator = 10_i128.pow(d.scale());
        Self::reduce(d.mantissa(), denominator).inspect_err(|err| {
            tracing::debug!(decimal = %d, %err, "decimal does not fit a fraction");
        })
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Non-terminating values are rounded to Decimal's 28 digits.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.numerator) / rust_decimal::Decimal::from(self.denominator)
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Wire form of a [`Fraction`]; deserialization re-validates through
/// [`Fraction::new`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionParts {
    pub numerator: i32,
    pub denominator: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<FractionParts> for Fraction {
    type Error = NumericError;

    fn try_from(parts: FractionParts) -> NumericResult<Self> {
        Self::new(parts.numerator, parts.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<Fraction> for FractionParts {
    fn from(frac: Fraction) -> Self {
        Self {
            numerator: frac.numerator,
            denominator: frac.denominator,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

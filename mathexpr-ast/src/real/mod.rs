//! Exact-where-possible real numbers.
//!
//! A [`Real`] is one of three representations:
//!
//! - [`Real::Integer`]: a whole number in the `i64` range.
//! - [`Real::Rational`]: a [`Fraction`] in lowest terms, with a positive denominator that is
//! never `1`.
//! - [`Real::Irrational`]: an IEEE-754 double, used only once an operation can no longer be
//! represented exactly (or one of its operands was already inexact).
//!
//! Arithmetic keeps values exact for as long as possible. If either operand of an operation is
//! [`Real::Irrational`], both operands are converted to `f64` and the result is
//! [`Real::Irrational`]. Otherwise the operation is computed as a fraction and reduced; fractions
//! with a denominator of `1` are re-normalized into [`Real::Integer`].
//!
//! ```
//! use mathexpr_ast::real::Real;
//!
//! let half = Real::fraction(1, 2).unwrap();
//! let third = Real::fraction(1, 3).unwrap();
//! assert_eq!(half + third, Real::fraction(5, 6).unwrap());
//! assert_eq!(half + half, Real::Integer(1));
//! ```
//!
//! Exact results that overflow the `i64` range fall back to [`Real::Irrational`].

pub mod fmt;
mod ops;

use num_rational::Ratio;
use num_traits::{CheckedSub, Signed};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use ops::ArithmeticError;

/// A fraction in lowest terms.
///
/// The denominator is always greater than `1` and shares no common factor with the numerator. Use
/// [`Real::fraction`] to build one from arbitrary parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i64, i64)", into = "(i64, i64)"))]
pub struct Fraction(Ratio<i64>);

impl Fraction {
    /// Returns the signed numerator.
    pub fn numerator(&self) -> i64 {
        *self.0.numer()
    }

    /// Returns the denominator, which is always greater than `1`.
    pub fn denominator(&self) -> i64 {
        *self.0.denom()
    }

    /// Converts the fraction to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
}

/// The parts given to [`Fraction::try_from`] do not form a fraction in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl std::fmt::Display for InvalidFraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} is not a fraction in lowest terms with a denominator greater than 1",
            self.numerator,
            self.denominator,
        )
    }
}

impl std::error::Error for InvalidFraction {}

/// Accepts only parts that already satisfy the [`Fraction`] invariants.
impl TryFrom<(i64, i64)> for Fraction {
    type Error = InvalidFraction;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        if denominator > 1 {
            let ratio = Ratio::new(numerator, denominator);
            if *ratio.numer() == numerator && *ratio.denom() == denominator {
                return Ok(Self(ratio));
            }
        }
        Err(InvalidFraction { numerator, denominator })
    }
}

impl From<Fraction> for (i64, i64) {
    fn from(fraction: Fraction) -> Self {
        (fraction.numerator(), fraction.denominator())
    }
}

/// A real number, stored exactly whenever possible.
///
/// Equality and ordering are total: values are compared numerically first, and values that are
/// numerically equal but stored in different representations (such as `Integer(2)` and
/// `Irrational(2.0)`) are ordered by representation, `Integer < Rational < Irrational`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Real {
    /// A whole number, such as `2` or `-144`.
    Integer(i64),

    /// A reduced fraction, such as `5/6`.
    Rational(Fraction),

    /// An inexact value, such as the square root of `2`.
    Irrational(f64),
}

impl Real {
    /// The integer zero.
    pub const ZERO: Real = Real::Integer(0);

    /// The integer one.
    pub const ONE: Real = Real::Integer(1);

    /// Creates the real number `numerator / denominator`, reduced to lowest terms.
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is zero.
    pub fn fraction(numerator: i64, denominator: i64) -> Result<Real, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Real::from_ratio(Ratio::new(i128::from(numerator), i128::from(denominator))))
    }

    /// Stores an exact value in the narrowest representation, falling back to
    /// [`Real::Irrational`] if its parts do not fit in an `i64`.
    pub(crate) fn from_ratio(ratio: Ratio<i128>) -> Real {
        match (i64::try_from(*ratio.numer()), i64::try_from(*ratio.denom())) {
            (Ok(numerator), Ok(1)) => Real::Integer(numerator),
            (Ok(numerator), Ok(denominator)) => {
                Real::Rational(Fraction(Ratio::new_raw(numerator, denominator)))
            },
            _ => {
                tracing::trace!(%ratio, "exact value does not fit in i64");
                Real::Irrational(*ratio.numer() as f64 / *ratio.denom() as f64)
            },
        }
    }

    /// Returns the value as a ratio if it is stored exactly.
    ///
    /// The ratio is widened to `i128`, so sums and products of two exact values never overflow
    /// before they are narrowed again by [`Real::from_ratio`].
    pub(crate) fn as_exact(&self) -> Option<Ratio<i128>> {
        match self {
            Real::Integer(n) => Some(Ratio::from_integer(i128::from(*n))),
            Real::Rational(Fraction(ratio)) => Some(Ratio::new_raw(
                i128::from(*ratio.numer()),
                i128::from(*ratio.denom()),
            )),
            Real::Irrational(_) => None,
        }
    }

    /// Converts the value to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Real::Integer(n) => *n as f64,
            Real::Rational(fraction) => fraction.to_f64(),
            Real::Irrational(x) => *x,
        }
    }

    /// Returns the contained integer if this is a [`Real::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Real::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns true if this is a [`Real::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Real::Integer(_))
    }

    /// Returns true if the value is zero, in any representation.
    pub fn is_zero(&self) -> bool {
        match self {
            Real::Integer(n) => *n == 0,
            // fractions are never zero
            Real::Rational(_) => false,
            Real::Irrational(x) => *x == 0.0,
        }
    }

    /// Returns true if the value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Real::Integer(n) => *n < 0,
            Real::Rational(fraction) => fraction.numerator() < 0,
            Real::Irrational(x) => *x < 0.0,
        }
    }

    /// Returns the absolute value.
    pub fn abs(self) -> Real {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Returns true if this value is within `tolerance` of `target`, inclusive.
    ///
    /// A negative tolerance never matches, not even an exact answer.
    pub fn is_within_tolerance(&self, target: &Real, tolerance: &Real) -> bool {
        if tolerance.is_negative() {
            return false;
        }
        let difference = self.as_exact()
            .zip(target.as_exact())
            .and_then(|(lhs, rhs)| lhs.checked_sub(&rhs))
            .map(|difference| Real::from_ratio(difference.abs()))
            .unwrap_or_else(|| Real::Irrational((self.to_f64() - target.to_f64()).abs()));
        difference.cmp_value(tolerance) != Ordering::Greater
    }

    /// Compares the numeric values of two reals, ignoring their representation.
    ///
    /// Exact values are compared exactly; as soon as one side is [`Real::Irrational`], both are
    /// compared as `f64`s.
    pub fn cmp_value(&self, other: &Real) -> Ordering {
        match (self.as_exact(), other.as_exact()) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }

    /// Ranks the representations, for ordering numerically equal values.
    fn rank(&self) -> u8 {
        match self {
            Real::Integer(_) => 0,
            Real::Rational(_) => 1,
            Real::Irrational(_) => 2,
        }
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| match (self, other) {
                (Real::Irrational(lhs), Real::Irrational(rhs)) => lhs.total_cmp(rhs),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Real {}

impl From<i64> for Real {
    fn from(n: i64) -> Self {
        Real::Integer(n)
    }
}

impl From<Fraction> for Real {
    fn from(fraction: Fraction) -> Self {
        Real::Rational(fraction)
    }
}

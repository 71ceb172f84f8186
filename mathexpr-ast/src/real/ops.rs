use num_rational::Ratio;
use num_traits::{checked_pow, CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Signed};
use std::{fmt, ops::{Add, Mul, Neg, Sub}};
use super::{Fraction, Real};

/// An arithmetic operation on [`Real`]s that has no real result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division by zero, including a zero base raised to a negative power.
    DivisionByZero,

    /// Zero raised to the power of zero.
    ZeroToZeroPower,

    /// The result is complex or not finite, such as the square root of a negative number.
    NonReal,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
            ArithmeticError::ZeroToZeroPower => write!(f, "zero raised to the power of zero"),
            ArithmeticError::NonReal => write!(f, "the result is not a real number"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Builds the exact result from `exact`, or falls back to an irrational result computed by
/// `inexact` if either operand was inexact or the exact computation overflowed.
fn exact_or(exact: Option<Ratio<i128>>, inexact: impl FnOnce() -> f64) -> Real {
    exact
        .map(Real::from_ratio)
        .unwrap_or_else(|| Real::Irrational(inexact()))
}

/// Applies a checked ratio operation to two exact operands.
fn exact_with(
    lhs: Real,
    rhs: Real,
    op: impl FnOnce(&Ratio<i128>, &Ratio<i128>) -> Option<Ratio<i128>>,
) -> Option<Ratio<i128>> {
    let (lhs, rhs) = lhs.as_exact().zip(rhs.as_exact())?;
    op(&lhs, &rhs)
}

impl Add for Real {
    type Output = Real;

    fn add(self, rhs: Real) -> Real {
        exact_or(exact_with(self, rhs, CheckedAdd::checked_add), || self.to_f64() + rhs.to_f64())
    }
}

impl Sub for Real {
    type Output = Real;

    fn sub(self, rhs: Real) -> Real {
        exact_or(exact_with(self, rhs, CheckedSub::checked_sub), || self.to_f64() - rhs.to_f64())
    }
}

impl Mul for Real {
    type Output = Real;

    fn mul(self, rhs: Real) -> Real {
        exact_or(exact_with(self, rhs, CheckedMul::checked_mul), || self.to_f64() * rhs.to_f64())
    }
}

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        exact_or(exact_with(Real::ZERO, self, CheckedSub::checked_sub), || -self.to_f64())
    }
}

impl Real {
    /// Divides `self` by `rhs`.
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero in any representation.
    pub fn checked_div(self, rhs: Real) -> Result<Real, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(exact_or(exact_with(self, rhs, CheckedDiv::checked_div), || self.to_f64() / rhs.to_f64()))
    }

    /// Returns `1 / self`.
    pub fn reciprocal(self) -> Result<Real, ArithmeticError> {
        Real::ONE.checked_div(self)
    }

    /// Raises `self` to the power of `exponent`.
    ///
    /// The result is exact when the base is exact and the exponent is an integer (including
    /// negative integers, which take the exact reciprocal), or when the exponent is a fraction
    /// `p/q` and the base is a perfect `q`-th power. `1` raised to any power is `1`.
    ///
    /// # Errors
    ///
    /// - [`ArithmeticError::ZeroToZeroPower`] for `0^0`.
    /// - [`ArithmeticError::DivisionByZero`] for zero raised to a negative power.
    /// - [`ArithmeticError::NonReal`] for even roots of negative numbers, negative bases with
    /// non-integer irrational exponents, and results that are not finite.
    pub fn pow(self, exponent: Real) -> Result<Real, ArithmeticError> {
        if matches!(self, Real::Integer(1)) {
            return Ok(Real::ONE);
        }

        let result = match exponent {
            Real::Integer(e) => self.powi(e)?,
            Real::Rational(e) => self.pow_fraction(e)?,
            Real::Irrational(e) => self.powf(e)?,
        };
        match result {
            Real::Irrational(x) if !x.is_finite() => Err(ArithmeticError::NonReal),
            _ => Ok(result),
        }
    }

    fn powi(self, exponent: i64) -> Result<Real, ArithmeticError> {
        if self.is_zero() {
            return match exponent {
                1.. => Ok(self),
                0 => Err(ArithmeticError::ZeroToZeroPower),
                _ => Err(ArithmeticError::DivisionByZero),
            };
        }

        let base = if exponent < 0 { self.reciprocal()? } else { self };
        let magnitude = exponent.unsigned_abs();
        let exact = base.as_exact()
            .zip(usize::try_from(magnitude).ok())
            .and_then(|(base, magnitude)| checked_pow(base, magnitude));
        Ok(exact_or(exact, || base.to_f64().powf(magnitude as f64)))
    }

    fn pow_fraction(self, exponent: Fraction) -> Result<Real, ArithmeticError> {
        let (p, q) = (exponent.numerator(), exponent.denominator());
        if self.is_zero() {
            return if p > 0 { Ok(self) } else { Err(ArithmeticError::DivisionByZero) };
        }
        if self.is_negative() && q % 2 == 0 {
            return Err(ArithmeticError::NonReal);
        }

        if let (Some(ratio), Ok(degree)) = (self.as_exact(), u32::try_from(q)) {
            let roots = exact_root(ratio.numer().unsigned_abs(), degree)
                .zip(exact_root(ratio.denom().unsigned_abs(), degree))
                .and_then(|(n, d)| Some((i128::try_from(n).ok()?, i128::try_from(d).ok()?)));
            if let Some((root_n, root_d)) = roots {
                let root_n = if ratio.is_negative() { -root_n } else { root_n };
                return Real::from_ratio(Ratio::new(root_n, root_d)).powi(p);
            }
        }

        let magnitude = self.abs().to_f64();
        let magnitude = if (p, q) == (1, 2) {
            magnitude.sqrt()
        } else {
            magnitude.powf(p as f64 / q as f64)
        };
        // odd root of a negative base
        if self.is_negative() && p % 2 != 0 {
            Ok(Real::Irrational(-magnitude))
        } else {
            Ok(Real::Irrational(magnitude))
        }
    }

    fn powf(self, exponent: f64) -> Result<Real, ArithmeticError> {
        let base = self.to_f64();
        if base == 0.0 {
            return if exponent > 0.0 {
                Ok(Real::Irrational(0.0))
            } else if exponent == 0.0 {
                Err(ArithmeticError::ZeroToZeroPower)
            } else {
                Err(ArithmeticError::DivisionByZero)
            };
        }
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(ArithmeticError::NonReal);
        }
        Ok(Real::Irrational(base.powf(exponent)))
    }

    /// Returns the principal square root.
    ///
    /// Perfect squares (such as `16` or `4/9`) stay exact. Negative values have no real square
    /// root and return [`ArithmeticError::NonReal`].
    pub fn sqrt(self) -> Result<Real, ArithmeticError> {
        if self.is_negative() {
            return Err(ArithmeticError::NonReal);
        }
        match self {
            Real::Irrational(x) => Ok(Real::Irrational(x.sqrt())),
            _ => self.pow_fraction(Fraction(Ratio::new_raw(1, 2))),
        }
    }
}

/// Returns the `degree`-th root of `n` if it is a whole number.
fn exact_root(n: u128, degree: u32) -> Option<u128> {
    if n < 2 {
        return Some(n);
    }
    let guess = (n as f64).powf(1.0 / degree as f64).round() as u128;
    (guess.saturating_sub(1)..=guess.saturating_add(1))
        .find(|root| root.checked_pow(degree) == Some(n))
}

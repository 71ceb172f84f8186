//! Polynomials in normalized sum-of-monomials form.
//!
//! A [`Polynomial`] is always normalized: terms with the same variables are merged, terms with a
//! zero coefficient are dropped, and the remaining terms are kept in the order given by
//! [`Term::canonical_cmp`]. Two polynomials are mathematically equal exactly when their term
//! sequences are equal.
//!
//! Use [`reduce`] to expand an expression tree into a polynomial.

mod reduce;
mod term;

pub use reduce::{reduce, reduce_equation};
pub use term::Term;

use mathexpr_ast::real::Real;
use std::{collections::BTreeMap, fmt, ops::{Add, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial in normalized form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// The zero polynomial, which has no terms.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(Real::ONE)
    }

    /// Creates a constant polynomial.
    pub fn constant(value: Real) -> Self {
        Self::from_terms(vec![Term::constant(value)])
    }

    /// Creates the polynomial `name`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::from_terms(vec![Term::variable(name)])
    }

    /// Creates a normalized polynomial from any sequence of terms.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let mut merged = BTreeMap::<BTreeMap<String, u32>, Real>::new();
        for term in terms {
            let coefficient = merged.entry(term.variables).or_insert(Real::ZERO);
            *coefficient = *coefficient + term.coefficient;
        }

        let mut terms = merged.into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(variables, coefficient)| Term { coefficient, variables })
            .collect::<Vec<_>>();
        terms.sort_by(Term::canonical_cmp);
        tracing::trace!(terms = terms.len(), "normalized polynomial");
        Self { terms }
    }

    /// The terms of the polynomial, in canonical order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the polynomial has no variables.
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(Term::is_constant)
    }

    /// The highest total degree of any term. The zero polynomial has degree `0`.
    pub fn degree(&self) -> u64 {
        // terms are sorted by descending degree
        self.terms.first().map_or(0, Term::degree)
    }

    /// The coefficient of the constant term, which is zero if there is none.
    pub fn constant_term(&self) -> Real {
        self.terms.last()
            .filter(|term| term.is_constant())
            .map_or(Real::ZERO, |term| term.coefficient)
    }

    /// Multiplies two polynomials, distributing every term of one over every term of the other.
    ///
    /// Returns [`None`] if the power of a variable in the product would not fit in a `u32`.
    pub fn checked_mul(&self, rhs: &Polynomial) -> Option<Polynomial> {
        let products = self.terms.iter()
            .flat_map(|lhs| rhs.terms.iter().map(move |rhs| lhs.checked_mul(rhs)))
            .collect::<Option<Vec<_>>>()?;
        Some(Polynomial::from_terms(products))
    }

    /// Raises the polynomial to a whole-number power, by squaring.
    ///
    /// Returns [`None`] if the power of a variable in the result would not fit in a `u32`.
    pub fn checked_pow(&self, exponent: u32) -> Option<Polynomial> {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Some(result)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().chain(&rhs.terms).cloned())
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().cloned().chain(rhs.terms.iter().map(Term::neg)))
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::from_terms(self.terms.iter().map(Term::neg))
    }
}

/// Formats the polynomial in the usual way, such as `3x^2 + 2xy - 1`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            let negative = term.coefficient.is_negative();
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {},
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let magnitude = term.coefficient.abs();
            if term.is_constant() || magnitude != Real::ONE {
                write!(f, "{}", magnitude.to_plain_string())?;
            }
            term.fmt_variables(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Polynomial {
        Polynomial::variable("x")
    }

    fn int(n: i64) -> Polynomial {
        Polynomial::constant(Real::Integer(n))
    }

    #[test]
    fn like_terms_merge() {
        let sum = &x() + &x();
        assert_eq!(sum.terms(), &[Term {
            coefficient: Real::Integer(2),
            variables: BTreeMap::from([("x".to_string(), 1)]),
        }]);
    }

    #[test]
    fn zero_terms_drop() {
        assert!((&x() - &x()).is_zero());
        assert_eq!(int(0), Polynomial::zero());
        assert_eq!(Polynomial::zero().to_string(), "0");
    }

    #[test]
    fn binomial_square() {
        // (x + 1)^2 = x^2 + 2x + 1
        let square = (&x() + &int(1)).checked_pow(2).unwrap();
        assert_eq!(square.to_string(), "x^2 + 2x + 1");
        assert_eq!(square.degree(), 2);
        assert_eq!(square.constant_term(), Real::ONE);
        assert_eq!((&x() + &int(1)).checked_pow(0), Some(Polynomial::one()));
    }

    #[test]
    fn display() {
        let y = Polynomial::variable("y");
        // 3x^2 + 2xy - 1
        let mul = |lhs: &Polynomial, rhs: &Polynomial| lhs.checked_mul(rhs).unwrap();
        let poly = &(&mul(&int(3), &mul(&x(), &x())) + &mul(&int(2), &mul(&x(), &y))) - &int(1);
        assert_eq!(poly.to_string(), "3x^2 + 2xy - 1");
        assert_eq!((-&poly).to_string(), "-3x^2 - 2xy + 1");
        assert_eq!(
            mul(&Polynomial::constant(Real::fraction(1, 2).unwrap()), &x()).to_string(),
            "0.5x",
        );
    }

    #[test]
    fn powers_by_squaring() {
        let high = x().checked_pow(u32::MAX).unwrap();
        assert_eq!(high.degree(), u64::from(u32::MAX));

        // (x^65536)^65536 is x^(2^32)
        let base = x().checked_pow(65536).unwrap();
        assert_eq!(base.checked_pow(65536), None);
        assert_eq!(high.checked_mul(&x()), None);

        let cube = (&x() - &int(2)).checked_pow(3).unwrap();
        assert_eq!(cube.to_string(), "x^3 - 6x^2 + 12x - 8");
    }

    #[test]
    fn constants() {
        assert!(int(4).is_constant());
        assert!(!x().is_constant());
        assert_eq!(x().constant_term(), Real::ZERO);
        assert_eq!(int(4).degree(), 0);
    }
}

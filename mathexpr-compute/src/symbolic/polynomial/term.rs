use mathexpr_ast::real::Real;
use std::{cmp::Ordering, collections::BTreeMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monomial: a coefficient multiplied by variables raised to positive whole-number powers.
///
/// A term with no variables is a constant term.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The coefficient of the term.
    pub coefficient: Real,

    /// The power each variable is raised to. Powers are never zero.
    pub variables: BTreeMap<String, u32>,
}

impl Term {
    /// Creates a constant term.
    pub fn constant(coefficient: Real) -> Self {
        Self { coefficient, variables: BTreeMap::new() }
    }

    /// Creates the term `1 * name`.
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            coefficient: Real::ONE,
            variables: BTreeMap::from([(name.into(), 1)]),
        }
    }

    /// The total degree of the term: the sum of the powers of its variables.
    pub fn degree(&self) -> u64 {
        self.variables.values().map(|&power| u64::from(power)).sum()
    }

    /// Returns true if the term has no variables.
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Multiplies two terms, multiplying their coefficients and adding the powers of their
    /// variables.
    ///
    /// Returns [`None`] if a power would not fit in a `u32`.
    pub fn checked_mul(&self, other: &Term) -> Option<Term> {
        let mut variables = self.variables.clone();
        for (name, &power) in &other.variables {
            let entry = variables.entry(name.clone()).or_insert(0);
            *entry = entry.checked_add(power)?;
        }
        Some(Term {
            coefficient: self.coefficient * other.coefficient,
            variables,
        })
    }

    /// Returns the term with its coefficient negated.
    pub fn neg(&self) -> Term {
        Term {
            coefficient: -self.coefficient,
            variables: self.variables.clone(),
        }
    }

    /// The order of terms inside a normalized polynomial.
    ///
    /// Higher total degree comes first. Terms of equal degree are compared variable by variable in
    /// name order: the smaller name comes first, and for the same name, the higher power comes
    /// first. The constant term, having degree zero, is always last.
    pub fn canonical_cmp(&self, other: &Term) -> Ordering {
        other.degree().cmp(&self.degree()).then_with(|| {
            self.variables.iter()
                .zip(&other.variables)
                .map(|((lhs_name, lhs_power), (rhs_name, rhs_power))| {
                    lhs_name.cmp(rhs_name).then_with(|| rhs_power.cmp(lhs_power))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| self.variables.len().cmp(&other.variables.len()))
        })
    }

    /// Writes the variables of the term, such as `x^2y`.
    pub(crate) fn fmt_variables(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, power) in &self.variables {
            if *power == 1 {
                write!(f, "{}", name)?;
            } else {
                write!(f, "{}^{}", name, power)?;
            }
        }
        Ok(())
    }
}

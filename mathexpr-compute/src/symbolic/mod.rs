//! Symbolic manipulation of expression trees: canonical forms and polynomial expansion.

pub mod canonical;
pub mod polynomial;

pub use canonical::{CanonicalEquation, Comparable};
pub use polynomial::{reduce, reduce_equation, Polynomial, Term};

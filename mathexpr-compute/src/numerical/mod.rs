//! Numeric evaluation of variable-free expressions.

pub mod eval;

pub use eval::Eval;

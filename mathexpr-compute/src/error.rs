//! Error kinds produced while evaluating or reducing an expression tree.

use mathexpr_attrs::ErrorKind;
use mathexpr_error::ErrorKind;

pub use mathexpr_ast::error::{MalformedOperator, UnsupportedLanguage};

/// A denominator evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this expression evaluates to zero"],
)]
pub struct DivisionByZero;

/// A variable was reached while evaluating an expression that must reduce to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", name),
    labels = ["this variable"],
    help = "only expressions made of numbers can be evaluated",
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,
}

/// Zero was raised to the power of zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "zero raised to the power of zero is undefined",
    labels = ["this power"],
)]
pub struct ZeroToZeroPower;

/// The result of an operation is not a finite real number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the result is not a real number",
    labels = ["this expression"],
    help = "square roots and fractional powers of negative numbers have no real value",
)]
pub struct NonRealResult;

/// A construct that cannot appear in a polynomial was reached while reducing an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} cannot appear in a polynomial", construct),
    labels = ["this part of the expression"],
    help = "polynomials are built from sums, differences, products and whole-number powers",
)]
pub struct NonPolynomialConstruct {
    /// A short description of the construct, such as "division".
    pub construct: &'static str,
}

/// Expanding a product or power would raise a variable past the largest supported power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "this polynomial has too high a degree to expand",
    labels = ["this part of the expression"],
    help = format!("variables can be raised to at most the power of {}", u32::MAX),
)]
pub struct DegreeOverflow;

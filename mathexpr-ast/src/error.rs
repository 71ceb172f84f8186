//! Error kinds produced while rendering an expression tree.

use mathexpr_attrs::ErrorKind;
use mathexpr_error::ErrorKind;
use crate::fmt::english::Language;

/// A node of the tree is unset, or uses an operator or function that is unset or unrecognized.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "this expression contains an unrecognized operator",
    labels = ["this part of the expression is incomplete"],
    help = "the expression was not built correctly; check the parser that produced it",
)]
pub struct MalformedOperator;

/// Prose rendering was requested in a language that has no renderer.
///
/// This is an expected outcome; callers should check for it with
/// [`Error::is`](mathexpr_error::Error::is) and fall back to another presentation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot read expressions aloud in {}", language),
    help = "only English is supported",
)]
pub struct UnsupportedLanguage {
    /// The language that was requested.
    pub language: Language,
}

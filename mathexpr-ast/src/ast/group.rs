use crate::{
    ast::expr::Expr,
    fmt::{Latex, LatexOptions},
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An explicitly parenthesized expression, such as `(x + 1)`.
///
/// Groups do not change the value of an expression, but they are kept in the tree so that
/// renderers can reproduce the parentheses the learner wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// The inner expression.
    pub expr: Box<Expr>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        self.expr.fmt(f)?;
        write!(f, ")")
    }
}

impl Latex for Group {
    fn fmt_latex(&self, f: &mut fmt::Formatter, options: LatexOptions) -> fmt::Result {
        write!(f, "\\left(")?;
        self.expr.fmt_latex(f, options)?;
        write!(f, "\\right)")
    }
}

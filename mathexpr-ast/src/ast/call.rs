use crate::{
    ast::{expr::Expr, op::FunctionKind},
    fmt::{Latex, LatexOptions},
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sqrt(2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: FunctionKind,

    /// The argument passed to the function.
    pub arg: Box<Expr>,
}

impl Call {
    /// The byte offset of the argument inside the plain-text rendering of this call.
    pub(crate) fn arg_offset(&self) -> usize {
        self.func.name().len() + 1
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.func.name(), self.arg)
    }
}

impl Latex for Call {
    fn fmt_latex(&self, f: &mut fmt::Formatter, options: LatexOptions) -> fmt::Result {
        match self.func {
            FunctionKind::SquareRoot => {
                write!(f, "\\sqrt{{")?;
                self.arg.innermost().fmt_latex(f, options)?;
                write!(f, "}}")
            },
            FunctionKind::Unspecified => {
                write!(f, "?\\left(")?;
                self.arg.fmt_latex(f, options)?;
                write!(f, "\\right)")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn square_root() {
        let expr = Expr::sqrt(Expr::group(Expr::add(Expr::var("x"), Expr::int(1))));
        assert_eq!(expr.to_string(), "sqrt((x+1))");
        assert_eq!(expr.as_display(LatexOptions::default()).to_string(), "\\sqrt{x + 1}");
    }
}

use crate::{
    ast::expr::Expr,
    fmt::{Latex, LatexOptions},
};
use mathexpr_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A statement that two expressions are equal, such as `y = 2x + 1`.
///
/// Paths into an equation start with the side: `0` for the left-hand side, `1` for the right-hand
/// side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,
}

impl Equation {
    /// Creates a new equation.
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Self { lhs, rhs }
    }

    /// Returns the side with the given index.
    pub fn side(&self, index: usize) -> Option<&Expr> {
        match index {
            0 => Some(&self.lhs),
            1 => Some(&self.rhs),
            _ => None,
        }
    }

    /// Returns the path of the first malformed node on either side, if any.
    pub fn find_malformed(&self) -> Option<Vec<usize>> {
        [&self.lhs, &self.rhs]
            .into_iter()
            .enumerate()
            .find_map(|(side, expr)| {
                expr.find_malformed().map(|mut path| {
                    path.insert(0, side);
                    path
                })
            })
    }

    /// Returns the byte range of the node at the given path inside the plain-text rendering of
    /// this equation.
    pub fn span_of(&self, path: &[usize]) -> Option<Range<usize>> {
        let (&side, rest) = path.split_first()?;
        let span = self.side(side)?.span_of(rest)?;
        let offset = if side == 0 {
            0
        } else {
            self.lhs.to_string().len() + " = ".len()
        };
        Some(span.start + offset..span.end + offset)
    }

    /// Renders the equation as LaTeX, failing if either side is malformed.
    pub fn to_latex(&self, options: LatexOptions) -> Result<String, Error> {
        if let Some(path) = self.find_malformed() {
            return Err(Error::new(
                self.span_of(&path).into_iter().collect(),
                crate::error::MalformedOperator,
            ));
        }
        Ok(self.as_display(options).to_string())
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

impl Latex for Equation {
    fn fmt_latex(&self, f: &mut fmt::Formatter, options: LatexOptions) -> fmt::Result {
        self.lhs.fmt_latex(f, options)?;
        write!(f, " = ")?;
        self.rhs.fmt_latex(f, options)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::error::MalformedOperator;
    use super::*;

    fn line() -> Equation {
        // y = 2x+1
        Equation::new(
            Expr::var("y"),
            Expr::add(Expr::implicit_mul(Expr::int(2), Expr::var("x")), Expr::int(1)),
        )
    }

    #[test]
    fn display() {
        assert_eq!(line().to_string(), "y = 2x+1");
        assert_eq!(line().to_latex(LatexOptions::default()).unwrap(), "y = 2x + 1");
    }

    #[test]
    fn spans() {
        let eq = line();
        let text = eq.to_string();
        assert_eq!(&text[eq.span_of(&[0]).unwrap()], "y");
        assert_eq!(&text[eq.span_of(&[1, 0, 1]).unwrap()], "x");
        assert_eq!(eq.span_of(&[]), None);
    }

    #[test]
    fn malformed_side() {
        let eq = Equation::new(Expr::var("y"), Expr::sqrt(Expr::Unset));
        assert_eq!(eq.find_malformed(), Some(vec![1, 0]));

        let err = eq.to_latex(LatexOptions::default()).unwrap_err();
        assert!(err.is::<MalformedOperator>());
        assert_eq!(&eq.to_string()[err.spans[0].clone()], "?");
    }
}

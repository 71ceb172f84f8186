use crate::{
    ast::{expr::Expr, op::{Precedence, UnaryOpKind}},
    fmt::{latex_operand, plain_operand, Latex, LatexOptions},
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary operation, such as `-x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operator of the unary operation.
    pub op: UnaryOpKind,

    /// The operand of the unary operation.
    pub operand: Box<Expr>,
}

impl Unary {
    /// Returns true if the operand must be parenthesized, as in `-(x+1)`.
    pub fn operand_needs_parens(&self) -> bool {
        self.operand.precedence() < Precedence::Neg
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), plain_operand(&self.operand, self.operand_needs_parens()))
    }
}

impl Latex for Unary {
    fn fmt_latex(&self, f: &mut fmt::Formatter, options: LatexOptions) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.op.symbol(),
            latex_operand(&self.operand, self.operand_needs_parens(), options),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn negated_sum() {
        let expr = Expr::neg(Expr::add(Expr::var("x"), Expr::int(1)));
        assert_eq!(expr.to_string(), "-(x+1)");
        assert_eq!(expr.as_display(LatexOptions::default()).to_string(), "-\\left(x + 1\\right)");
    }

    #[test]
    fn negated_power() {
        let expr = Expr::neg(Expr::pow(Expr::var("x"), Expr::int(2)));
        assert_eq!(expr.to_string(), "-x^2");
    }

    #[test]
    fn positive() {
        assert_eq!(Expr::pos(Expr::int(3)).to_string(), "+3");
    }
}

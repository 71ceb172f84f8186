use crate::{
    ast::{
        expr::Expr,
        op::{Associativity, BinOp, BinOpKind},
    },
    fmt::{fmt_pow, latex_operand, plain_operand, Latex, LatexOptions},
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,
}

impl Binary {
    /// Returns true if the left-hand side must be parenthesized to keep the shape of the tree when
    /// written out.
    pub fn lhs_needs_parens(&self) -> bool {
        let (child, parent) = (self.lhs.precedence(), self.op.precedence());
        child < parent || (child == parent && self.op.associativity() == Associativity::Right)
    }

    /// Returns true if the right-hand side must be parenthesized to keep the shape of the tree
    /// when written out.
    pub fn rhs_needs_parens(&self) -> bool {
        let (child, parent) = (self.rhs.precedence(), self.op.precedence());
        child < parent || (child == parent && self.op.associativity() == Associativity::Left)
    }

    /// Renders both operands and the operator between them in plain text.
    pub(crate) fn plain_parts(&self) -> (String, &'static str, String) {
        let lhs = plain_operand(&self.lhs, self.lhs_needs_parens());
        let rhs = plain_operand(&self.rhs, self.rhs_needs_parens());
        let op = match self.op.kind {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul if self.op.implicit
                && rhs.starts_with(|c: char| c.is_alphabetic() || c == '(') => "",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Exp => "^",
            BinOpKind::Unspecified => "?",
        };
        (lhs, op, rhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lhs, op, rhs) = self.plain_parts();
        write!(f, "{}{}{}", lhs, op, rhs)
    }
}

impl Latex for Binary {
    fn fmt_latex(&self, f: &mut fmt::Formatter, options: LatexOptions) -> fmt::Result {
        match self.op.kind {
            BinOpKind::Exp => fmt_pow(f, &self.lhs, &self.rhs, options),
            BinOpKind::Div if options.div_as_fraction => {
                write!(f, "\\frac{{")?;
                self.lhs.innermost().fmt_latex(f, options)?;
                write!(f, "}}{{")?;
                self.rhs.innermost().fmt_latex(f, options)?;
                write!(f, "}}")
            },
            kind => {
                let lhs = latex_operand(&self.lhs, self.lhs_needs_parens(), options);
                let rhs = latex_operand(&self.rhs, self.rhs_needs_parens(), options);
                let op = match kind {
                    BinOpKind::Add => " + ",
                    BinOpKind::Sub => " - ",
                    // juxtaposed digits would read as one number, and a sign as `+` or `-`
                    BinOpKind::Mul if self.op.implicit
                        && !rhs.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => "",
                    BinOpKind::Mul => " \\times ",
                    BinOpKind::Div => " \\div ",
                    BinOpKind::Exp | BinOpKind::Unspecified => " ? ",
                };
                write!(f, "{}{}{}", lhs, op, rhs)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn latex(expr: &Expr) -> String {
        expr.as_display(LatexOptions::default()).to_string()
    }

    #[test]
    fn left_associative_parens() {
        // (a - b) - c needs no parentheses, a - (b - c) does
        let left = Expr::sub(Expr::sub(Expr::var("a"), Expr::var("b")), Expr::var("c"));
        let right = Expr::sub(Expr::var("a"), Expr::sub(Expr::var("b"), Expr::var("c")));
        assert_eq!(left.to_string(), "a-b-c");
        assert_eq!(right.to_string(), "a-(b-c)");
        assert_eq!(latex(&right), "a - \\left(b - c\\right)");
    }

    #[test]
    fn right_associative_parens() {
        let left = Expr::pow(Expr::pow(Expr::var("a"), Expr::var("b")), Expr::var("c"));
        let right = Expr::pow(Expr::var("a"), Expr::pow(Expr::var("b"), Expr::var("c")));
        assert_eq!(left.to_string(), "(a^b)^c");
        assert_eq!(right.to_string(), "a^b^c");
    }

    #[test]
    fn lower_precedence_child() {
        let expr = Expr::mul(Expr::add(Expr::int(1), Expr::int(2)), Expr::int(3));
        assert_eq!(expr.to_string(), "(1+2)*3");
        assert_eq!(latex(&expr), "\\left(1 + 2\\right) \\times 3");
    }

    #[test]
    fn implicit_multiplication() {
        let expr = Expr::implicit_mul(Expr::int(2), Expr::var("x"));
        assert_eq!(expr.to_string(), "2x");
        assert_eq!(latex(&expr), "2x");

        let expr = Expr::implicit_mul(Expr::var("x"), Expr::int(2));
        assert_eq!(expr.to_string(), "x*2");
        assert_eq!(latex(&expr), "x \\times 2");

        let expr = Expr::implicit_mul(Expr::int(3), Expr::group(Expr::add(Expr::var("x"), Expr::int(1))));
        assert_eq!(expr.to_string(), "3(x+1)");
        assert_eq!(latex(&expr), "3\\left(x + 1\\right)");
    }

    #[test]
    fn implicit_multiplication_by_signed_value() {
        let expr = Expr::implicit_mul(Expr::int(2), Expr::neg(Expr::var("x")));
        assert_eq!(expr.to_string(), "2*-x");
        assert_eq!(latex(&expr), "2 \\times -x");

        let expr = Expr::implicit_mul(Expr::int(2), Expr::int(-3));
        assert_eq!(expr.to_string(), "2*-3");
        assert_eq!(latex(&expr), "2 \\times -3");

        let expr = Expr::implicit_mul(Expr::var("y"), Expr::pos(Expr::var("x")));
        assert_eq!(latex(&expr), "y \\times +x");
    }

    #[test]
    fn unspecified_operator() {
        let expr = Expr::binary(Expr::int(1), BinOpKind::Unspecified, Expr::int(2));
        assert_eq!(expr.to_string(), "1?2");
    }
}

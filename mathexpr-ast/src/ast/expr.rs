use crate::{
    ast::{
        binary::Binary,
        call::Call,
        group::Group,
        op::{BinOp, BinOpKind, FunctionKind, Precedence, UnaryOpKind},
        unary::Unary,
    },
    error::MalformedOperator,
    fmt::{Latex, LatexOptions},
    real::Real,
};
use mathexpr_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One side of a mathematical statement, such as `3x + 6`.
///
/// Trees are produced by an external parser and are never mutated afterwards; every transformation
/// (such as [`Expr::strip_groups`]) builds a new tree.
///
/// Nodes are addressed by *paths*: the sequence of child indices leading from the root to the
/// node. The children of a [`Binary`] are numbered `0` (left) and `1` (right); unary operations,
/// function calls and groups have a single child, `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A real number, such as `2` or `0.5`.
    Constant(Real),

    /// A variable, such as `x`.
    Variable(String),

    /// A binary operation, such as `x + 1`.
    Binary(Binary),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A function call, such as `sqrt(2)`.
    Call(Call),

    /// An explicit parenthesization, such as `(x + 1)`.
    Group(Group),

    /// A node whose kind was never set by the producer of the tree.
    Unset,
}

impl Expr {
    /// Creates an integer constant.
    pub fn int(n: i64) -> Self {
        Expr::Constant(Real::Integer(n))
    }

    /// Creates a constant.
    pub fn real(real: Real) -> Self {
        Expr::Constant(real)
    }

    /// Creates a variable.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(lhs: Expr, op: impl Into<BinOp>, rhs: Expr) -> Self {
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: op.into(),
            rhs: Box::new(rhs),
        })
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(lhs, BinOpKind::Add, rhs)
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(lhs, BinOpKind::Sub, rhs)
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(lhs, BinOpKind::Mul, rhs)
    }

    /// Creates a multiplication written without an operator, such as `2x`.
    pub fn implicit_mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(lhs, BinOp::implicit_mul(), rhs)
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(lhs, BinOpKind::Div, rhs)
    }

    pub fn pow(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(lhs, BinOpKind::Exp, rhs)
    }

    /// Creates a unary operation.
    pub fn unary(op: UnaryOpKind, operand: Expr) -> Self {
        Expr::Unary(Unary { op, operand: Box::new(operand) })
    }

    pub fn neg(operand: Expr) -> Self {
        Self::unary(UnaryOpKind::Neg, operand)
    }

    pub fn pos(operand: Expr) -> Self {
        Self::unary(UnaryOpKind::Pos, operand)
    }

    /// Creates a function call.
    pub fn call(func: FunctionKind, arg: Expr) -> Self {
        Expr::Call(Call { func, arg: Box::new(arg) })
    }

    pub fn sqrt(arg: Expr) -> Self {
        Self::call(FunctionKind::SquareRoot, arg)
    }

    pub fn group(expr: Expr) -> Self {
        Expr::Group(Group { expr: Box::new(expr) })
    }

    /// Returns the precedence of the expression, used to decide where parentheses are needed when
    /// the expression is written out.
    ///
    /// Negative constants are written with a leading minus sign, so they have the precedence of
    /// unary negation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Constant(real) if real.is_negative() => Precedence::Neg,
            Expr::Binary(binary) => binary.op.precedence(),
            Expr::Unary(unary) => unary.op.precedence(),
            Expr::Constant(_) | Expr::Variable(_) | Expr::Call(_) | Expr::Group(_) | Expr::Unset => {
                Precedence::Atom
            },
        }
    }

    /// If this expression is an [`Expr::Group`], returns the innermost expression in the group.
    /// Otherwise, returns this expression.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Group(group) = inner {
            inner = &group.expr;
        }
        inner
    }

    /// Returns true if the expression reads as a single term: a constant, a variable, a function
    /// call, or a group around one of those.
    pub fn is_single_term(&self) -> bool {
        match self {
            Expr::Constant(_) | Expr::Variable(_) | Expr::Call(_) => true,
            Expr::Group(group) => group.expr.is_single_term(),
            Expr::Binary(_) | Expr::Unary(_) | Expr::Unset => false,
        }
    }

    /// Returns the child at the given index, if any.
    pub fn child(&self, index: usize) -> Option<&Expr> {
        match (self, index) {
            (Expr::Binary(binary), 0) => Some(&binary.lhs),
            (Expr::Binary(binary), 1) => Some(&binary.rhs),
            (Expr::Unary(unary), 0) => Some(&unary.operand),
            (Expr::Call(call), 0) => Some(&call.arg),
            (Expr::Group(group), 0) => Some(&group.expr),
            _ => None,
        }
    }

    /// Returns an iterator over the direct children of this expression, in path order.
    pub fn children(&self) -> impl Iterator<Item = &Expr> {
        (0..).map_while(move |index| self.child(index))
    }

    /// Builds a new tree with every [`Expr::Group`] removed.
    pub fn strip_groups(&self) -> Expr {
        match self {
            Expr::Binary(binary) => Expr::Binary(Binary {
                lhs: Box::new(binary.lhs.strip_groups()),
                op: binary.op,
                rhs: Box::new(binary.rhs.strip_groups()),
            }),
            Expr::Unary(unary) => Expr::unary(unary.op, unary.operand.strip_groups()),
            Expr::Call(call) => Expr::call(call.func, call.arg.strip_groups()),
            Expr::Group(group) => group.expr.strip_groups(),
            Expr::Constant(_) | Expr::Variable(_) | Expr::Unset => self.clone(),
        }
    }

    /// Returns true if this node itself (not its children) is unset or uses an unspecified
    /// operator.
    pub fn is_malformed_node(&self) -> bool {
        match self {
            Expr::Unset => true,
            Expr::Binary(binary) => binary.op.kind == BinOpKind::Unspecified,
            Expr::Unary(unary) => unary.op == UnaryOpKind::Unspecified,
            Expr::Call(call) => call.func == FunctionKind::Unspecified,
            Expr::Constant(_) | Expr::Variable(_) | Expr::Group(_) => false,
        }
    }

    /// Returns the path of the first malformed node in pre-order, if any.
    pub fn find_malformed(&self) -> Option<Vec<usize>> {
        if self.is_malformed_node() {
            return Some(Vec::new());
        }
        self.children()
            .enumerate()
            .find_map(|(index, child)| {
                child.find_malformed().map(|mut path| {
                    path.insert(0, index);
                    path
                })
            })
    }

    /// Returns the byte offset of the given child inside the plain-text rendering of this node.
    fn child_offset(&self, index: usize) -> Option<usize> {
        match (self, index) {
            (Expr::Binary(binary), 0) => Some(usize::from(binary.lhs_needs_parens())),
            (Expr::Binary(binary), 1) => {
                let (lhs, op, _) = binary.plain_parts();
                Some(lhs.len() + op.len() + usize::from(binary.rhs_needs_parens()))
            },
            (Expr::Unary(unary), 0) => {
                Some(unary.op.symbol().len() + usize::from(unary.operand_needs_parens()))
            },
            (Expr::Call(call), 0) => Some(call.arg_offset()),
            (Expr::Group(_), 0) => Some(1),
            _ => None,
        }
    }

    /// Returns the byte range of the node at the given path inside the plain-text rendering of
    /// this expression (its [`Display`](fmt::Display) output).
    pub fn span_of(&self, path: &[usize]) -> Option<Range<usize>> {
        let mut node = self;
        let mut start = 0;
        for &index in path {
            start += node.child_offset(index)?;
            node = node.child(index)?;
        }
        Some(start..start + node.to_string().len())
    }

    /// Builds the [`MalformedOperator`] error for the malformed node at `path`.
    pub(crate) fn malformed_error(&self, path: &[usize]) -> Error {
        Error::new(self.span_of(path).into_iter().collect(), MalformedOperator)
    }

    /// Renders the expression as LaTeX.
    ///
    /// Fails with [`MalformedOperator`] instead of producing partial output if any node of the
    /// tree is unset or uses an unspecified operator.
    pub fn to_latex(&self, options: LatexOptions) -> Result<String, Error> {
        if let Some(path) = self.find_malformed() {
            return Err(self.malformed_error(&path));
        }
        Ok(self.as_display(options).to_string())
    }
}

impl From<Real> for Expr {
    fn from(real: Real) -> Self {
        Expr::Constant(real)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(real) => write!(f, "{}", real.to_plain_string()),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Group(group) => group.fmt(f),
            Expr::Unset => write!(f, "?"),
        }
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut fmt::Formatter, options: LatexOptions) -> fmt::Result {
        match self {
            Expr::Constant(real) => write!(f, "{}", real.to_plain_string()),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary(binary) => binary.fmt_latex(f, options),
            Expr::Unary(unary) => unary.fmt_latex(f, options),
            Expr::Call(call) => call.fmt_latex(f, options),
            Expr::Group(group) => group.fmt_latex(f, options),
            Expr::Unset => write!(f, "?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// `2x + (y - 1)`
    fn sample() -> Expr {
        Expr::add(
            Expr::implicit_mul(Expr::int(2), Expr::var("x")),
            Expr::group(Expr::sub(Expr::var("y"), Expr::int(1))),
        )
    }

    #[test]
    fn display_sample() {
        assert_eq!(sample().to_string(), "2x+(y-1)");
    }

    #[test]
    fn spans_point_into_display() {
        let expr = sample();
        let text = expr.to_string();
        for (path, expected) in [
            (vec![], "2x+(y-1)"),
            (vec![0], "2x"),
            (vec![0, 1], "x"),
            (vec![1], "(y-1)"),
            (vec![1, 0], "y-1"),
            (vec![1, 0, 1], "1"),
        ] {
            let span = expr.span_of(&path).unwrap();
            assert_eq!(&text[span], expected);
        }
        assert_eq!(expr.span_of(&[2]), None);
    }

    #[test]
    fn spans_inside_parens() {
        // (x+1)*y
        let expr = Expr::mul(Expr::add(Expr::var("x"), Expr::int(1)), Expr::var("y"));
        let text = expr.to_string();
        assert_eq!(text, "(x+1)*y");
        assert_eq!(&text[expr.span_of(&[0]).unwrap()], "x+1");
        assert_eq!(&text[expr.span_of(&[1]).unwrap()], "y");

        let expr = Expr::neg(Expr::sqrt(Expr::var("z")));
        let text = expr.to_string();
        assert_eq!(&text[expr.span_of(&[0, 0]).unwrap()], "z");
    }

    #[test]
    fn strip_groups() {
        let stripped = sample().strip_groups();
        assert_eq!(
            stripped,
            Expr::add(
                Expr::implicit_mul(Expr::int(2), Expr::var("x")),
                Expr::sub(Expr::var("y"), Expr::int(1)),
            ),
        );
        assert_eq!(Expr::group(Expr::group(Expr::var("x"))).strip_groups(), Expr::var("x"));
    }

    #[test]
    fn find_malformed() {
        assert_eq!(sample().find_malformed(), None);

        let expr = Expr::add(
            Expr::int(1),
            Expr::neg(Expr::binary(Expr::var("x"), BinOpKind::Unspecified, Expr::Unset)),
        );
        assert_eq!(expr.find_malformed(), Some(vec![1, 0]));
        assert_eq!(Expr::Unset.find_malformed(), Some(vec![]));
    }

    #[test]
    fn latex_rejects_malformed() {
        let expr = Expr::add(Expr::int(1), Expr::Unset);
        let err = expr.to_latex(LatexOptions::default()).unwrap_err();
        assert!(err.is::<MalformedOperator>());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn latex_sample() {
        assert_eq!(
            sample().to_latex(LatexOptions::default()).unwrap(),
            "2x + \\left(y - 1\\right)",
        );
    }

    #[test]
    fn single_terms() {
        assert!(Expr::int(3).is_single_term());
        assert!(Expr::sqrt(Expr::add(Expr::var("x"), Expr::int(1))).is_single_term());
        assert!(Expr::group(Expr::var("x")).is_single_term());
        assert!(!Expr::group(Expr::neg(Expr::var("x"))).is_single_term());
        assert!(!Expr::implicit_mul(Expr::int(2), Expr::var("x")).is_single_term());
    }

    #[test]
    fn children_in_path_order() {
        let expr = sample();
        let children = expr.children().collect::<Vec<_>>();
        assert_eq!(children.len(), 2);
        assert_eq!(Some(children[1]), expr.child(1));
        assert_eq!(expr.child(2), None);
    }
}

//! Canonical trees for comparing expressions up to commutativity and associativity.
//!
//! [`Comparable::from_expr`] rewrites an expression so that sums and products become flat, sorted
//! lists of their operands. Two expressions built from `+` and `*` that differ only in the order
//! or nesting of their operands produce equal canonical trees:
//!
//! ```
//! use mathexpr_ast::Expr;
//! use mathexpr_compute::symbolic::canonical::Comparable;
//!
//! // (x + 2) + y and y + (2 + x)
//! let a = Expr::add(Expr::add(Expr::var("x"), Expr::int(2)), Expr::var("y"));
//! let b = Expr::add(Expr::var("y"), Expr::group(Expr::add(Expr::int(2), Expr::var("x"))));
//! assert_eq!(Comparable::from_expr(&a), Comparable::from_expr(&b));
//! ```
//!
//! Subtraction, division and exponentiation are kept as they are, with their operands
//! canonicalized in place. Groups are transparent.

use mathexpr_ast::{
    ast::{BinOpKind, Equation, FunctionKind, UnaryOpKind},
    real::Real,
    Expr,
};
use std::{cmp::Ordering, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical expression tree.
///
/// Equality is structural, except that [`Comparable::Invalid`] is never equal to anything, not
/// even itself; any tree containing a malformed node therefore never compares equal to another
/// tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Comparable {
    Constant(Real),
    Variable(String),
    SquareRoot(Box<Comparable>),
    Negation(Box<Comparable>),
    Positive(Box<Comparable>),

    /// A flattened sum, with its operands sorted.
    Sum(Vec<Comparable>),
    Difference(Box<Comparable>, Box<Comparable>),

    /// A flattened product, with its operands sorted.
    Product(Vec<Comparable>),
    Quotient(Box<Comparable>, Box<Comparable>),
    Power(Box<Comparable>, Box<Comparable>),

    /// A node that was unset or used an unrecognized operator.
    Invalid,
}

/// Collects the operands of nested `kind` operations, looking through groups.
fn collect_operands<'a>(expr: &'a Expr, kind: BinOpKind, operands: &mut Vec<&'a Expr>) {
    match expr.innermost() {
        Expr::Binary(binary) if binary.op.kind == kind => {
            collect_operands(&binary.lhs, kind, operands);
            collect_operands(&binary.rhs, kind, operands);
        },
        operand => operands.push(operand),
    }
}

impl Comparable {
    /// Builds the canonical tree of the given expression.
    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Constant(real) => Comparable::Constant(*real),
            Expr::Variable(name) => Comparable::Variable(name.clone()),
            Expr::Group(group) => Comparable::from_expr(&group.expr),
            Expr::Unary(unary) => {
                let operand = Box::new(Comparable::from_expr(&unary.operand));
                match unary.op {
                    UnaryOpKind::Neg => Comparable::Negation(operand),
                    UnaryOpKind::Pos => Comparable::Positive(operand),
                    UnaryOpKind::Unspecified => Comparable::Invalid,
                }
            },
            Expr::Call(call) => match call.func {
                FunctionKind::SquareRoot => {
                    Comparable::SquareRoot(Box::new(Comparable::from_expr(&call.arg)))
                },
                FunctionKind::Unspecified => Comparable::Invalid,
            },
            Expr::Binary(binary) => {
                let pair = || {
                    (
                        Box::new(Comparable::from_expr(&binary.lhs)),
                        Box::new(Comparable::from_expr(&binary.rhs)),
                    )
                };
                match binary.op.kind {
                    kind @ (BinOpKind::Add | BinOpKind::Mul) => {
                        let mut operands = Vec::new();
                        collect_operands(expr, kind, &mut operands);
                        let mut operands = operands.into_iter()
                            .map(Comparable::from_expr)
                            .collect::<Vec<_>>();
                        operands.sort_by(Comparable::canonical_cmp);
                        if kind == BinOpKind::Add {
                            Comparable::Sum(operands)
                        } else {
                            Comparable::Product(operands)
                        }
                    },
                    BinOpKind::Sub => {
                        let (lhs, rhs) = pair();
                        Comparable::Difference(lhs, rhs)
                    },
                    BinOpKind::Div => {
                        let (lhs, rhs) = pair();
                        Comparable::Quotient(lhs, rhs)
                    },
                    BinOpKind::Exp => {
                        let (lhs, rhs) = pair();
                        Comparable::Power(lhs, rhs)
                    },
                    BinOpKind::Unspecified => Comparable::Invalid,
                }
            },
            Expr::Unset => Comparable::Invalid,
        }
    }

    /// Ranks the kinds of node: constants first, then variables, function calls, unary operations,
    /// and binary operations in operator order.
    fn rank(&self) -> u8 {
        match self {
            Comparable::Constant(_) => 0,
            Comparable::Variable(_) => 1,
            Comparable::SquareRoot(_) => 2,
            Comparable::Negation(_) => 3,
            Comparable::Positive(_) => 4,
            Comparable::Sum(_) => 5,
            Comparable::Difference(..) => 6,
            Comparable::Product(_) => 7,
            Comparable::Quotient(..) => 8,
            Comparable::Power(..) => 9,
            Comparable::Invalid => 10,
        }
    }

    /// The total order used to sort the operands of sums and products.
    ///
    /// Nodes are ordered by kind (see [`Comparable::rank`]), then by value or name, then by their
    /// children, compared recursively. Two nodes are ordered equal exactly when they have the same
    /// structure; all [`Comparable::Invalid`] nodes are ordered equal to each other.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        use Comparable::*;

        match (self, other) {
            (Constant(lhs), Constant(rhs)) => lhs.cmp(rhs),
            (Variable(lhs), Variable(rhs)) => lhs.cmp(rhs),
            (SquareRoot(lhs), SquareRoot(rhs))
                | (Negation(lhs), Negation(rhs))
                | (Positive(lhs), Positive(rhs)) => lhs.canonical_cmp(rhs),
            (Sum(lhs), Sum(rhs)) | (Product(lhs), Product(rhs)) => {
                lhs.iter()
                    .zip(rhs)
                    .map(|(l, r)| l.canonical_cmp(r))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or_else(|| lhs.len().cmp(&rhs.len()))
            },
            (Difference(l1, l2), Difference(r1, r2))
                | (Quotient(l1, l2), Quotient(r1, r2))
                | (Power(l1, l2), Power(r1, r2)) => {
                l1.canonical_cmp(r1).then_with(|| l2.canonical_cmp(r2))
            },
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Returns true if the tree contains a malformed node anywhere.
    pub fn is_invalid(&self) -> bool {
        match self {
            Comparable::Invalid => true,
            Comparable::Constant(_) | Comparable::Variable(_) => false,
            Comparable::SquareRoot(inner) | Comparable::Negation(inner) | Comparable::Positive(inner) => {
                inner.is_invalid()
            },
            Comparable::Sum(operands) | Comparable::Product(operands) => {
                operands.iter().any(Comparable::is_invalid)
            },
            Comparable::Difference(lhs, rhs)
                | Comparable::Quotient(lhs, rhs)
                | Comparable::Power(lhs, rhs) => lhs.is_invalid() || rhs.is_invalid(),
        }
    }
}

impl PartialEq for Comparable {
    fn eq(&self, other: &Self) -> bool {
        use Comparable::*;

        match (self, other) {
            (Constant(lhs), Constant(rhs)) => lhs == rhs,
            (Variable(lhs), Variable(rhs)) => lhs == rhs,
            (SquareRoot(lhs), SquareRoot(rhs))
                | (Negation(lhs), Negation(rhs))
                | (Positive(lhs), Positive(rhs)) => lhs == rhs,
            (Sum(lhs), Sum(rhs)) | (Product(lhs), Product(rhs)) => lhs == rhs,
            (Difference(l1, l2), Difference(r1, r2))
                | (Quotient(l1, l2), Quotient(r1, r2))
                | (Power(l1, l2), Power(r1, r2)) => l1 == r1 && l2 == r2,
            // includes `Invalid`, which equals nothing
            _ => false,
        }
    }
}

/// Folds a list of operands into a left-nested chain of `kind` operations.
fn fold_operands(operands: Vec<Comparable>, kind: BinOpKind, empty: i64) -> Expr {
    let mut operands = operands.into_iter().map(Expr::from);
    match operands.next() {
        Some(first) => operands.fold(first, |acc, operand| Expr::binary(acc, kind, operand)),
        None => Expr::int(empty),
    }
}

/// Rebuilds an expression tree from a canonical tree.
///
/// Sums and products become left-nested chains in their sorted order. Malformed nodes become
/// [`Expr::Unset`].
impl From<Comparable> for Expr {
    fn from(comparable: Comparable) -> Self {
        match comparable {
            Comparable::Constant(real) => Expr::Constant(real),
            Comparable::Variable(name) => Expr::Variable(name),
            Comparable::SquareRoot(arg) => Expr::sqrt(Expr::from(*arg)),
            Comparable::Negation(operand) => Expr::neg(Expr::from(*operand)),
            Comparable::Positive(operand) => Expr::pos(Expr::from(*operand)),
            Comparable::Sum(operands) => fold_operands(operands, BinOpKind::Add, 0),
            Comparable::Product(operands) => fold_operands(operands, BinOpKind::Mul, 1),
            Comparable::Difference(lhs, rhs) => Expr::sub(Expr::from(*lhs), Expr::from(*rhs)),
            Comparable::Quotient(lhs, rhs) => Expr::div(Expr::from(*lhs), Expr::from(*rhs)),
            Comparable::Power(lhs, rhs) => Expr::pow(Expr::from(*lhs), Expr::from(*rhs)),
            Comparable::Invalid => Expr::Unset,
        }
    }
}

impl fmt::Display for Comparable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Expr::from(self.clone()).fmt(f)
    }
}

/// The canonical trees of both sides of an equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalEquation {
    pub lhs: Comparable,
    pub rhs: Comparable,
}

impl CanonicalEquation {
    /// Canonicalizes each side of the equation independently.
    pub fn from_equation(equation: &Equation) -> Self {
        Self {
            lhs: Comparable::from_expr(&equation.lhs),
            rhs: Comparable::from_expr(&equation.rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;

    fn canon(expr: &Expr) -> Comparable {
        Comparable::from_expr(expr)
    }

    #[test]
    fn flattens_and_sorts() {
        // x * (3 * y)
        let expr = Expr::mul(Expr::var("x"), Expr::group(Expr::mul(Expr::int(3), Expr::var("y"))));
        assert_eq!(
            canon(&expr),
            Comparable::Product(vec![
                Comparable::Constant(Real::Integer(3)),
                Comparable::Variable("x".to_string()),
                Comparable::Variable("y".to_string()),
            ]),
        );
    }

    #[test]
    fn implicit_matches_explicit() {
        let implicit = Expr::implicit_mul(Expr::int(2), Expr::var("x"));
        let explicit = Expr::mul(Expr::var("x"), Expr::int(2));
        assert_eq!(canon(&implicit), canon(&explicit));
    }

    #[test]
    fn non_commutative_keep_order() {
        let a = Expr::sub(Expr::var("x"), Expr::int(1));
        let b = Expr::sub(Expr::int(1), Expr::var("x"));
        assert_ne!(canon(&a), canon(&b));

        let a = Expr::pow(Expr::var("x"), Expr::int(2));
        let b = Expr::pow(Expr::int(2), Expr::var("x"));
        assert_ne!(canon(&a), canon(&b));
    }

    #[test]
    fn operands_of_non_commutative_are_canonical() {
        // (x + 1) / 2 and (1 + x) / 2
        let a = Expr::div(Expr::add(Expr::var("x"), Expr::int(1)), Expr::int(2));
        let b = Expr::div(Expr::add(Expr::int(1), Expr::var("x")), Expr::int(2));
        assert_eq!(canon(&a), canon(&b));
    }

    #[test]
    fn sum_is_not_product() {
        let a = Expr::add(Expr::var("x"), Expr::var("y"));
        let b = Expr::mul(Expr::var("x"), Expr::var("y"));
        assert_ne!(canon(&a), canon(&b));
    }

    #[test]
    fn invalid_never_equal() {
        let expr = Expr::add(Expr::var("x"), Expr::Unset);
        assert_ne!(canon(&expr), canon(&expr));
        assert!(canon(&expr).is_invalid());
        assert_ne!(Comparable::Invalid, Comparable::Invalid);
        assert!(!canon(&Expr::var("x")).is_invalid());
    }

    #[test]
    fn back_to_expr() {
        let expr = Expr::add(Expr::var("y"), Expr::add(Expr::var("x"), Expr::int(2)));
        let rebuilt = Expr::from(canon(&expr));
        assert_eq!(rebuilt.to_string(), "2+x+y");
        assert_eq!(canon(&expr).to_string(), "2+x+y");
    }

    #[test]
    fn constants_sort_numerically() {
        let expr = Expr::add(
            Expr::add(Expr::int(3), Expr::real(Real::fraction(1, 2).unwrap())),
            Expr::int(-1),
        );
        assert_eq!(canon(&expr).to_string(), "-1+0.5+3");
    }

    /// Expressions built from `+` and `*` over a few leaves.
    fn arb_expr() -> impl Strategy<Value = Expr> {
        let leaf = prop_oneof![
            (-5i64..5).prop_map(Expr::int),
            prop::sample::select(vec!["x", "y", "z"]).prop_map(Expr::var),
        ];
        leaf.prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::add(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::mul(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::implicit_mul(l, r)),
                (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::sub(l, r)),
                inner.prop_map(Expr::group),
            ]
        })
    }

    /// Swaps the operands of every `+` and `*` node.
    fn mirror(expr: &Expr) -> Expr {
        match expr {
            Expr::Binary(binary) if binary.op.kind.is_commutative() => {
                Expr::binary(mirror(&binary.rhs), binary.op, mirror(&binary.lhs))
            },
            Expr::Binary(binary) => Expr::binary(mirror(&binary.lhs), binary.op, mirror(&binary.rhs)),
            Expr::Group(group) => Expr::group(mirror(&group.expr)),
            other => other.clone(),
        }
    }

    #[test]
    fn equation_sides() {
        // 2x = y + 1 and x*2 = 1 + y
        let a = Equation::new(
            Expr::implicit_mul(Expr::int(2), Expr::var("x")),
            Expr::add(Expr::var("y"), Expr::int(1)),
        );
        let b = Equation::new(
            Expr::mul(Expr::var("x"), Expr::int(2)),
            Expr::add(Expr::int(1), Expr::var("y")),
        );
        assert_eq!(CanonicalEquation::from_equation(&a), CanonicalEquation::from_equation(&b));

        let swapped = Equation::new(b.rhs.clone(), b.lhs.clone());
        assert_ne!(CanonicalEquation::from_equation(&a), CanonicalEquation::from_equation(&swapped));
    }

    proptest! {
        #[test]
        fn commutative_invariance(expr in arb_expr()) {
            prop_assert_eq!(canon(&expr), canon(&mirror(&expr)));
        }

        #[test]
        fn idempotent(expr in arb_expr()) {
            let once = canon(&expr);
            let twice = canon(&Expr::from(once.clone()));
            prop_assert_eq!(once, twice);
        }
    }
}

use mathexpr_ast::{
    ast::{BinOpKind, Equation, FunctionKind, UnaryOpKind},
    real::Real,
    Expr,
};
use mathexpr_error::Error;
use crate::{
    ctxt::Ctxt,
    error::{DegreeOverflow, MalformedOperator, NonPolynomialConstruct},
};
use super::Polynomial;

/// Reads the exponent of a power as a whole number, if it is a constant non-negative integer.
fn whole_exponent(exponent: &Polynomial) -> Option<u32> {
    if !exponent.is_constant() {
        return None;
    }
    match exponent.constant_term() {
        Real::Integer(n) => u32::try_from(n).ok(),
        _ => None,
    }
}

/// Expands the expression into a polynomial.
fn expand(expr: &Expr, ctxt: &mut Ctxt) -> Result<Polynomial, Error> {
    match expr {
        Expr::Constant(real) => Ok(Polynomial::constant(*real)),
        Expr::Variable(name) => Ok(Polynomial::variable(name.as_str())),
        Expr::Group(group) => ctxt.with_child(0, |ctxt| expand(&group.expr, ctxt)),
        Expr::Unary(unary) => {
            if unary.op == UnaryOpKind::Unspecified {
                return Err(ctxt.error(MalformedOperator));
            }
            let operand = ctxt.with_child(0, |ctxt| expand(&unary.operand, ctxt))?;
            Ok(match unary.op {
                UnaryOpKind::Neg => -&operand,
                UnaryOpKind::Pos | UnaryOpKind::Unspecified => operand,
            })
        },
        Expr::Call(call) => match call.func {
            FunctionKind::SquareRoot => Err(ctxt.error(NonPolynomialConstruct {
                construct: "a square root",
            })),
            FunctionKind::Unspecified => Err(ctxt.error(MalformedOperator)),
        },
        Expr::Binary(binary) => {
            match binary.op.kind {
                BinOpKind::Unspecified => return Err(ctxt.error(MalformedOperator)),
                BinOpKind::Div => {
                    return Err(ctxt.error(NonPolynomialConstruct { construct: "division" }));
                },
                _ => {},
            }

            let lhs = ctxt.with_child(0, |ctxt| expand(&binary.lhs, ctxt))?;
            let rhs = ctxt.with_child(1, |ctxt| expand(&binary.rhs, ctxt))?;
            match binary.op.kind {
                BinOpKind::Add => Ok(&lhs + &rhs),
                BinOpKind::Sub => Ok(&lhs - &rhs),
                BinOpKind::Mul => lhs.checked_mul(&rhs).ok_or_else(|| ctxt.error(DegreeOverflow)),
                BinOpKind::Exp => {
                    let exponent = whole_exponent(&rhs).ok_or_else(|| {
                        ctxt.child_error(1, NonPolynomialConstruct {
                            construct: "a power that is not a whole number",
                        })
                    })?;
                    lhs.checked_pow(exponent).ok_or_else(|| ctxt.error(DegreeOverflow))
                },
                BinOpKind::Div | BinOpKind::Unspecified => Err(ctxt.error(MalformedOperator)),
            }
        },
        Expr::Unset => Err(ctxt.error(MalformedOperator)),
    }
}

/// Expands the expression into a normalized polynomial.
///
/// The expression may use `+`, `-`, `*`, unary signs, groups, and powers whose exponent reduces
/// to a constant whole number. Division, square roots and any other exponent fail with
/// [`NonPolynomialConstruct`]. A variable raised past `u32::MAX` fails with [`DegreeOverflow`].
pub fn reduce(expr: &Expr) -> Result<Polynomial, Error> {
    expand(expr, &mut Ctxt::new(expr))
}

/// Moves every term of the equation to the left-hand side, returning `lhs - rhs` as a normalized
/// polynomial.
pub fn reduce_equation(equation: &Equation) -> Result<Polynomial, Error> {
    let lhs = expand(&equation.lhs, &mut Ctxt::for_side(equation, 0))?;
    let rhs = expand(&equation.rhs, &mut Ctxt::for_side(equation, 1))?;
    Ok(&lhs - &rhs)
}

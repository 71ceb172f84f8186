mod binary;
mod call;
mod expr;
mod unary;

use mathexpr_ast::real::{ArithmeticError, Real};
use mathexpr_error::Error;
use crate::{
    ctxt::Ctxt,
    error::{DivisionByZero, NonRealResult, ZeroToZeroPower},
};

/// Any type that can be evaluated to produce a [`Real`].
///
/// Evaluation is defined only for trees without variables. Every failure is reported as an
/// [`Error`] pointing at the offending node; no failure is ever turned into zero, infinity or NaN.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context to locate errors.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<Real, Error>;
}

/// Lifts an [`ArithmeticError`] into an [`Error`] pointing at the current node.
pub(crate) fn arithmetic_error(err: ArithmeticError, ctxt: &Ctxt) -> Error {
    match err {
        ArithmeticError::DivisionByZero => ctxt.error(DivisionByZero),
        ArithmeticError::ZeroToZeroPower => ctxt.error(ZeroToZeroPower),
        ArithmeticError::NonReal => ctxt.error(NonRealResult),
    }
}

/// Rejects infinite and NaN results.
pub(crate) fn finite(value: Real, ctxt: &Ctxt) -> Result<Real, Error> {
    match value {
        Real::Irrational(x) if !x.is_finite() => Err(ctxt.error(NonRealResult)),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use mathexpr_ast::Expr;
    use pretty_assertions::assert_eq;
    use crate::error::{MalformedOperator, UnboundVariable};
    use super::*;

    fn eval(expr: &Expr) -> Result<Real, Error> {
        expr.eval(&mut Ctxt::new(expr))
    }

    fn frac(n: i64, d: i64) -> Real {
        Real::fraction(n, d).unwrap()
    }

    #[test]
    fn exact_rationals() {
        // 1/2 + 1/3
        let expr = Expr::add(
            Expr::div(Expr::int(1), Expr::int(2)),
            Expr::div(Expr::int(1), Expr::int(3)),
        );
        assert_eq!(eval(&expr).unwrap(), frac(5, 6));
    }

    #[test]
    fn integer_arithmetic() {
        // (1 + 9) / 5 * 3
        let expr = Expr::mul(
            Expr::div(Expr::group(Expr::add(Expr::int(1), Expr::int(9))), Expr::int(5)),
            Expr::int(3),
        );
        assert_eq!(eval(&expr).unwrap(), Real::Integer(6));

        // 3 * -5 + 6
        let expr = Expr::add(Expr::mul(Expr::int(3), Expr::neg(Expr::int(5))), Expr::int(6));
        assert_eq!(eval(&expr).unwrap(), Real::Integer(-9));
    }

    #[test]
    fn powers() {
        let expr = Expr::pow(Expr::int(2), Expr::int(-3));
        assert_eq!(eval(&expr).unwrap(), frac(1, 8));

        let expr = Expr::pow(Expr::int(27), Expr::div(Expr::int(2), Expr::int(3)));
        assert_eq!(eval(&expr).unwrap(), Real::Integer(9));
    }

    #[test]
    fn square_roots() {
        assert_eq!(eval(&Expr::sqrt(Expr::int(49))).unwrap(), Real::Integer(7));

        let root = eval(&Expr::sqrt(Expr::int(2))).unwrap();
        assert!(matches!(root, Real::Irrational(_)));
        assert_float_absolute_eq!(root.to_f64(), std::f64::consts::SQRT_2);

        let err = eval(&Expr::sqrt(Expr::neg(Expr::int(4)))).unwrap_err();
        assert!(err.is::<NonRealResult>());
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::div(Expr::int(5), Expr::int(0));
        let err = eval(&expr).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        // "5/0", pointing at the denominator
        assert_eq!(err.spans, vec![2..3]);

        let expr = Expr::div(Expr::int(5), Expr::sub(Expr::int(2), Expr::int(2)));
        assert!(eval(&expr).unwrap_err().is::<DivisionByZero>());

        let expr = Expr::pow(Expr::int(0), Expr::int(-2));
        assert!(eval(&expr).unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn zero_to_zero() {
        let expr = Expr::pow(Expr::int(0), Expr::sub(Expr::int(1), Expr::int(1)));
        assert!(eval(&expr).unwrap_err().is::<ZeroToZeroPower>());
    }

    #[test]
    fn unbound_variable() {
        let expr = Expr::add(Expr::int(1), Expr::implicit_mul(Expr::int(2), Expr::var("x")));
        let err = eval(&expr).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnboundVariable>(),
            Some(&UnboundVariable { name: "x".to_string() }),
        );
        // "1+2x"
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn malformed() {
        let expr = Expr::add(Expr::int(1), Expr::Unset);
        assert!(eval(&expr).unwrap_err().is::<MalformedOperator>());

        let expr = Expr::unary(mathexpr_ast::ast::UnaryOpKind::Unspecified, Expr::int(1));
        assert!(eval(&expr).unwrap_err().is::<MalformedOperator>());
    }

    #[test]
    fn overflow_is_not_real() {
        let expr = Expr::pow(Expr::real(Real::Irrational(10.0)), Expr::int(400));
        assert!(eval(&expr).unwrap_err().is::<NonRealResult>());

        let expr = Expr::real(Real::Irrational(f64::NAN));
        assert!(eval(&expr).unwrap_err().is::<NonRealResult>());
    }
}

//! Evaluation, canonicalization and polynomial reduction of expression trees from
//! [`mathexpr_ast`], and the entry points used by a grading layer to compare answers.
//!
//! Every entry point is a pure function of its input tree: nothing is cached across calls and no
//! input is mutated, so they can be called from any number of threads at once.
//!
//! ```
//! use mathexpr_ast::{Expr, Real};
//! use mathexpr_compute::{canonicalize, evaluate, reduce};
//!
//! // 1/2 + 1/3
//! let sum = Expr::add(
//!     Expr::div(Expr::int(1), Expr::int(2)),
//!     Expr::div(Expr::int(1), Expr::int(3)),
//! );
//! assert_eq!(evaluate(&sum).unwrap(), Real::fraction(5, 6).unwrap());
//!
//! // 3x + 2 and 2 + x*3
//! let a = Expr::add(Expr::implicit_mul(Expr::int(3), Expr::var("x")), Expr::int(2));
//! let b = Expr::add(Expr::int(2), Expr::mul(Expr::var("x"), Expr::int(3)));
//! assert_eq!(canonicalize(&a), canonicalize(&b));
//! assert_eq!(reduce(&a).unwrap(), reduce(&b).unwrap());
//! ```

pub mod ctxt;
pub mod error;
pub mod numerical;
pub mod symbolic;

use ctxt::Ctxt;
use mathexpr_ast::{
    ast::Equation,
    fmt::{english::{Language, ProseOptions}, LatexOptions},
    real::Real,
    Expr,
};
use mathexpr_error::Error;
use numerical::Eval;
use symbolic::{CanonicalEquation, Comparable, Polynomial};

/// Rewrites the expression into its canonical tree. Two expressions that differ only in the
/// order or nesting of the operands of `+` and `*` have equal canonical trees.
pub fn canonicalize(expr: &Expr) -> Comparable {
    let canonical = Comparable::from_expr(expr);
    tracing::debug!(%expr, %canonical, "canonicalized");
    canonical
}

/// Canonicalizes both sides of the equation independently.
pub fn canonicalize_equation(equation: &Equation) -> CanonicalEquation {
    let canonical = CanonicalEquation::from_equation(equation);
    tracing::debug!(%equation, lhs = %canonical.lhs, rhs = %canonical.rhs, "canonicalized equation");
    canonical
}

/// Evaluates a variable-free expression to a single value.
pub fn evaluate(expr: &Expr) -> Result<Real, Error> {
    let result = expr.eval(&mut Ctxt::new(expr));
    match &result {
        Ok(value) => tracing::debug!(%expr, %value, "evaluated"),
        Err(err) => tracing::debug!(%expr, %err, "evaluation failed"),
    }
    result
}

/// Expands the expression into a normalized polynomial.
pub fn reduce(expr: &Expr) -> Result<Polynomial, Error> {
    let result = symbolic::reduce(expr);
    match &result {
        Ok(poly) => tracing::debug!(%expr, %poly, "reduced"),
        Err(err) => tracing::debug!(%expr, %err, "reduction failed"),
    }
    result
}

/// Reduces `lhs - rhs` of the equation to a normalized polynomial.
pub fn reduce_equation(equation: &Equation) -> Result<Polynomial, Error> {
    let result = symbolic::reduce_equation(equation);
    match &result {
        Ok(poly) => tracing::debug!(%equation, %poly, "reduced equation"),
        Err(err) => tracing::debug!(%equation, %err, "equation reduction failed"),
    }
    result
}

/// Renders the expression as LaTeX. With `div_as_fraction`, division renders as `\frac{}{}`.
pub fn render_latex(expr: &Expr, div_as_fraction: bool) -> Result<String, Error> {
    let latex = expr.to_latex(LatexOptions::new(div_as_fraction))?;
    tracing::debug!(%expr, %latex, "rendered latex");
    Ok(latex)
}

/// Renders both sides of the equation as LaTeX, joined by `=`.
pub fn render_equation_latex(equation: &Equation, div_as_fraction: bool) -> Result<String, Error> {
    let latex = equation.to_latex(LatexOptions::new(div_as_fraction))?;
    tracing::debug!(%equation, %latex, "rendered latex");
    Ok(latex)
}

/// Reads the expression aloud in the given language.
///
/// Only [`Language::English`] is supported; any other language fails with
/// [`error::UnsupportedLanguage`], which callers are expected to branch on.
pub fn render_english(
    expr: &Expr,
    language: Language,
    div_as_fraction: bool,
) -> Result<String, Error> {
    let prose = expr.to_english(ProseOptions::new(language, div_as_fraction))?;
    tracing::debug!(%expr, %prose, "rendered prose");
    Ok(prose)
}

/// Reads the equation aloud in the given language, as `left equals right`.
pub fn render_equation_english(
    equation: &Equation,
    language: Language,
    div_as_fraction: bool,
) -> Result<String, Error> {
    let prose = equation.to_english(ProseOptions::new(language, div_as_fraction))?;
    tracing::debug!(%equation, %prose, "rendered prose");
    Ok(prose)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use super::*;
    use crate::error::{DivisionByZero, MalformedOperator, UnsupportedLanguage};

    #[test]
    fn like_terms() {
        let poly = reduce(&Expr::add(Expr::var("x"), Expr::var("x"))).unwrap();
        assert_eq!(poly.to_string(), "2x");
        assert_eq!(poly.terms().len(), 1);
    }

    #[test]
    fn divide_by_zero() {
        let err = evaluate(&Expr::div(Expr::int(5), Expr::int(0))).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.to_string(), "cannot divide by zero");
    }

    #[test]
    fn english_fractions() {
        let half = Expr::div(Expr::int(1), Expr::int(2));
        assert_eq!(render_english(&half, Language::English, true).unwrap(), "half");

        let two_thirds = Expr::div(Expr::int(2), Expr::int(3));
        assert_eq!(render_english(&two_thirds, Language::English, true).unwrap(), "two thirds");

        let large = Expr::div(Expr::int(11), Expr::int(2));
        assert_eq!(render_english(&large, Language::English, true).unwrap(), "11 over 2");
    }

    #[test]
    fn unsupported_language() {
        let expr = Expr::var("x");
        let err = render_english(&expr, Language::Arabic, true).unwrap_err();
        assert!(err.is::<UnsupportedLanguage>());

        let equation = Equation::new(Expr::var("y"), Expr::int(2));
        let err = render_equation_english(&equation, Language::Hindi, false).unwrap_err();
        assert!(err.is::<UnsupportedLanguage>());
    }

    #[test]
    fn implicit_multiplication_prose() {
        let expr = Expr::implicit_mul(Expr::int(2), Expr::var("x"));
        assert_eq!(render_english(&expr, Language::English, false).unwrap(), "2 x");
    }

    #[test]
    fn renderers_reject_malformed_trees() {
        let expr = Expr::add(Expr::var("x"), Expr::Unset);
        assert!(render_latex(&expr, true).unwrap_err().is::<MalformedOperator>());
        assert!(render_english(&expr, Language::English, true).unwrap_err().is::<MalformedOperator>());
    }

    #[test]
    fn equations() {
        // x^2 = 2x - 1
        let equation = Equation::new(
            Expr::pow(Expr::var("x"), Expr::int(2)),
            Expr::sub(Expr::implicit_mul(Expr::int(2), Expr::var("x")), Expr::int(1)),
        );
        assert_eq!(render_equation_latex(&equation, true).unwrap(), "x^{2} = 2x - 1");
        assert_eq!(reduce_equation(&equation).unwrap().to_string(), "x^2 - 2x + 1");

        let reordered = Equation::new(
            Expr::pow(Expr::var("x"), Expr::int(2)),
            Expr::sub(Expr::mul(Expr::var("x"), Expr::int(2)), Expr::int(1)),
        );
        assert_eq!(canonicalize_equation(&equation), canonicalize_equation(&reordered));
    }

    proptest! {
        #[test]
        fn rational_sums_are_exact(a in 1i64..50, b in 1i64..50, c in 1i64..50, d in 1i64..50) {
            // a/b + c/d
            let expr = Expr::add(
                Expr::div(Expr::int(a), Expr::int(b)),
                Expr::div(Expr::int(c), Expr::int(d)),
            );
            let expected = Real::fraction(a * d + c * b, b * d).unwrap();
            prop_assert_eq!(evaluate(&expr).unwrap(), expected);
        }
    }
}

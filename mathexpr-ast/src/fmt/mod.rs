//! Renderers for expression trees.
//!
//! Three textual forms are supported:
//!
//! - A compact plain-text form through [`Display`], such as `3x+6`. Error spans point into this
//! form.
//! - LaTeX, through the [`Latex`] trait and [`Expr::to_latex`].
//! - English prose, through [`Expr::to_english`] (see the [`english`] module).

pub mod english;

use std::fmt::{Display, Formatter, Result};
use crate::ast::{expr::Expr, op::Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that control LaTeX rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatexOptions {
    /// Render division as `\frac{a}{b}` instead of `a \div b`.
    pub div_as_fraction: bool,
}

impl LatexOptions {
    /// Creates options with the given division style.
    pub fn new(div_as_fraction: bool) -> Self {
        Self { div_as_fraction }
    }
}

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter, options: LatexOptions) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self, options: LatexOptions) -> LatexFormatter<'_, Self> {
        LatexFormatter(self, options)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T, LatexOptions);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f, self.1)
    }
}

/// Renders `expr` in plain text, wrapped in parentheses if `parens` is true.
pub(crate) fn plain_operand(expr: &Expr, parens: bool) -> String {
    if parens {
        format!("({})", expr)
    } else {
        expr.to_string()
    }
}

/// Renders `expr` as LaTeX, wrapped in `\left(` and `\right)` if `parens` is true.
pub(crate) fn latex_operand(expr: &Expr, parens: bool, options: LatexOptions) -> String {
    if parens {
        format!("\\left({}\\right)", expr.as_display(options))
    } else {
        expr.as_display(options).to_string()
    }
}

/// Helper to format powers.
///
/// The base is parenthesized if it binds no tighter than exponentiation, as in
/// `\left(-2\right)^{x}`. The exponent is always braced, so explicit groups directly inside it are
/// dropped.
pub fn fmt_pow(f: &mut Formatter, base: &Expr, exponent: &Expr, options: LatexOptions) -> Result {
    let parens = base.precedence() <= Precedence::Exp;
    write!(f, "{}^{{", latex_operand(base, parens, options))?;
    exponent.innermost().fmt_latex(f, options)?;
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::ast::expr::Expr;
    use super::*;

    #[test]
    fn plain_polynomial() {
        // x^2+5x+6
        let expr = Expr::add(
            Expr::add(
                Expr::pow(Expr::var("x"), Expr::int(2)),
                Expr::implicit_mul(Expr::int(5), Expr::var("x")),
            ),
            Expr::int(6),
        );
        assert_eq!(expr.to_string(), "x^2+5x+6");
    }

    #[test]
    fn latex_pow_parenthesizes_base() {
        let expr = Expr::pow(Expr::neg(Expr::var("x")), Expr::int(2));
        assert_eq!(expr.as_display(LatexOptions::default()).to_string(), "\\left(-x\\right)^{2}");

        let expr = Expr::pow(Expr::int(-2), Expr::var("n"));
        assert_eq!(expr.as_display(LatexOptions::default()).to_string(), "\\left(-2\\right)^{n}");
    }

    #[test]
    fn latex_exponent_drops_group() {
        let expr = Expr::pow(
            Expr::var("e"),
            Expr::group(Expr::add(Expr::var("x"), Expr::int(1))),
        );
        assert_eq!(expr.as_display(LatexOptions::default()).to_string(), "e^{x + 1}");
    }

    #[test]
    fn latex_division_styles() {
        let expr = Expr::div(Expr::add(Expr::var("x"), Expr::int(1)), Expr::int(2));
        assert_eq!(
            expr.as_display(LatexOptions::new(true)).to_string(),
            "\\frac{x + 1}{2}",
        );
        assert_eq!(
            expr.as_display(LatexOptions::new(false)).to_string(),
            "\\left(x + 1\\right) \\div 2",
        );
    }
}

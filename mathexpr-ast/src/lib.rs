//! Expression trees for student-entered math, with exact-where-possible real numbers and
//! renderers for display.
//!
//! The tree ([`ast::Expr`] and [`ast::Equation`]) is produced by an external parser and consumed
//! read-only by everything in this workspace. This crate provides:
//!
//! - [`real::Real`], the numeric value model (exact integers and rationals, inexact irrationals).
//! - The tree itself, with helpers to strip explicit groups, locate malformed nodes, and map tree
//! paths to byte ranges of the plain-text rendering (used to highlight errors).
//! - LaTeX rendering through [`fmt::Latex`], and English prose through
//! [`ast::Expr::to_english`].
//!
//! ```
//! use mathexpr_ast::{ast::Expr, fmt::LatexOptions};
//!
//! // 2x + 1/2
//! let expr = Expr::add(
//!     Expr::implicit_mul(Expr::int(2), Expr::var("x")),
//!     Expr::div(Expr::int(1), Expr::int(2)),
//! );
//! assert_eq!(expr.to_string(), "2x+1/2");
//! assert_eq!(expr.to_latex(LatexOptions::new(true)).unwrap(), "2x + \\frac{1}{2}");
//! ```

pub mod ast;
pub mod error;
pub mod fmt;
pub mod real;

pub use ast::{Equation, Expr};
pub use real::Real;

//! Reads expressions aloud as English prose, for screen readers and audio hints.
//!
//! ```
//! use mathexpr_ast::{ast::Expr, fmt::english::{Language, ProseOptions}};
//!
//! let expr = Expr::add(Expr::implicit_mul(Expr::int(2), Expr::var("x")), Expr::int(1));
//! let prose = expr.to_english(ProseOptions::new(Language::English, true)).unwrap();
//! assert_eq!(prose, "2 x plus 1");
//! ```
//!
//! Rendering is all-or-nothing: a tree containing an unset node or unrecognized operator fails
//! with [`MalformedOperator`], and any language other than [`Language::English`] fails with
//! [`UnsupportedLanguage`].

use mathexpr_error::Error;
use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt};
use crate::{
    ast::{
        binary::Binary,
        equation::Equation,
        expr::Expr,
        op::{BinOpKind, FunctionKind, UnaryOpKind},
    },
    error::{MalformedOperator, UnsupportedLanguage},
    real::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The display language requested by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    English,
    Arabic,
    Hindi,
    Hinglish,
    Portuguese,
    BrazilianPortuguese,

    /// A language that is unset or unrecognized.
    #[cfg_attr(feature = "serde", serde(other))]
    Unspecified,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
            Language::Hinglish => "Hinglish",
            Language::Portuguese => "Portuguese",
            Language::BrazilianPortuguese => "Brazilian Portuguese",
            Language::Unspecified => "an unspecified language",
        };
        f.write_str(name)
    }
}

/// Options that control prose rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProseOptions {
    /// The language to read the expression in.
    pub language: Language,

    /// Read division as a fraction ("two thirds", "x over 2") instead of "divided by".
    pub div_as_fraction: bool,
}

impl ProseOptions {
    /// Creates new prose options.
    pub fn new(language: Language, div_as_fraction: bool) -> Self {
        Self { language, div_as_fraction }
    }
}

/// Ordinal names used when the numerator is `1`, as in "half".
static SINGULAR_ORDINALS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "oneth"),
        (2, "half"),
        (3, "third"),
        (4, "fourth"),
        (5, "fifth"),
        (6, "sixth"),
        (7, "seventh"),
        (8, "eighth"),
        (9, "ninth"),
        (10, "tenth"),
    ])
});

/// Ordinal names used for any other numerator, as in "two thirds".
static PLURAL_ORDINALS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "oneths"),
        (2, "halves"),
        (3, "thirds"),
        (4, "fourths"),
        (5, "fifths"),
        (6, "sixths"),
        (7, "sevenths"),
        (8, "eighths"),
        (9, "ninths"),
        (10, "tenths"),
    ])
});

static NUMBER_WORDS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0, "zero"),
        (1, "one"),
        (2, "two"),
        (3, "three"),
        (4, "four"),
        (5, "five"),
        (6, "six"),
        (7, "seven"),
        (8, "eight"),
        (9, "nine"),
        (10, "ten"),
    ])
});

/// Reads a small whole-number ratio as an ordinal fraction, such as "half" or "two thirds".
///
/// Only numerators from 0 to 10 and denominators from 1 to 10, with the denominator no smaller
/// than the numerator, have an ordinal reading.
fn ordinal_fraction(numerator: i64, denominator: i64) -> Option<String> {
    if !(0..=10).contains(&numerator) || !(1..=10).contains(&denominator) || denominator < numerator {
        return None;
    }
    if numerator == 1 {
        SINGULAR_ORDINALS.get(&denominator).map(|name| name.to_string())
    } else {
        let number = NUMBER_WORDS.get(&numerator)?;
        let name = PLURAL_ORDINALS.get(&denominator)?;
        Some(format!("{} {}", number, name))
    }
}

fn integer_constant(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Constant(real) => real.as_integer(),
        _ => None,
    }
}

/// Returns true if the multiplication reads as adjacent terms, as in "2 x" or
/// "3 x raised to the power of 2".
fn reads_as_implicit(binary: &Binary) -> bool {
    binary.op.implicit
        && matches!(*binary.lhs, Expr::Constant(_))
        && match &*binary.rhs {
            Expr::Variable(_) => true,
            Expr::Binary(rhs) => rhs.op.kind == BinOpKind::Exp,
            _ => false,
        }
}

fn binary_english(binary: &Binary, div_as_fraction: bool) -> String {
    let lhs = english(&binary.lhs, div_as_fraction);
    let rhs = english(&binary.rhs, div_as_fraction);
    match binary.op.kind {
        BinOpKind::Add => format!("{} plus {}", lhs, rhs),
        BinOpKind::Sub => format!("{} minus {}", lhs, rhs),
        BinOpKind::Mul if reads_as_implicit(binary) => format!("{} {}", lhs, rhs),
        BinOpKind::Mul => format!("{} times {}", lhs, rhs),
        BinOpKind::Div if div_as_fraction => {
            match (integer_constant(&binary.lhs), integer_constant(&binary.rhs)) {
                (Some(numerator), Some(denominator)) => ordinal_fraction(numerator, denominator)
                    .unwrap_or_else(|| format!("{} over {}", lhs, rhs)),
                _ => format!("the fraction with numerator {} and denominator {}", lhs, rhs),
            }
        },
        BinOpKind::Div => format!("{} divided by {}", lhs, rhs),
        BinOpKind::Exp => format!("{} raised to the power of {}", lhs, rhs),
        BinOpKind::Unspecified => format!("{} ? {}", lhs, rhs),
    }
}

/// Reads a well-formed expression in English.
fn english(expr: &Expr, div_as_fraction: bool) -> String {
    match expr {
        Expr::Constant(real @ Real::Integer(_)) => real.to_string(),
        Expr::Constant(real) => real.to_plain_string(),
        Expr::Variable(name) => match name.as_str() {
            "z" => "zed".to_string(),
            "Z" => "Zed".to_string(),
            _ => name.clone(),
        },
        Expr::Binary(binary) => binary_english(binary, div_as_fraction),
        Expr::Unary(unary) => {
            let operand = english(&unary.operand, div_as_fraction);
            match unary.op {
                UnaryOpKind::Neg => format!("negative {}", operand),
                UnaryOpKind::Pos => format!("positive {}", operand),
                UnaryOpKind::Unspecified => format!("? {}", operand),
            }
        },
        Expr::Call(call) => {
            let arg = english(&call.arg, div_as_fraction);
            match call.func {
                FunctionKind::SquareRoot if call.arg.is_single_term() => {
                    format!("square root of {}", arg)
                },
                FunctionKind::SquareRoot => format!("start square root {} end square root", arg),
                FunctionKind::Unspecified => format!("? of {}", arg),
            }
        },
        Expr::Group(group) => {
            let inner = english(&group.expr, div_as_fraction);
            if expr.is_single_term() {
                inner
            } else {
                format!("open parenthesis {} close parenthesis", inner)
            }
        },
        Expr::Unset => "?".to_string(),
    }
}

fn check_language(language: Language) -> Result<(), Error> {
    match language {
        Language::English => Ok(()),
        language => Err(Error::new(Vec::new(), UnsupportedLanguage { language })),
    }
}

impl Expr {
    /// Reads the expression aloud as prose.
    ///
    /// # Errors
    ///
    /// - [`UnsupportedLanguage`] if the requested language is not English.
    /// - [`MalformedOperator`] if any node of the tree is unset or unrecognized. Nothing is
    /// rendered in that case, not even the well-formed parts of the tree.
    pub fn to_english(&self, options: ProseOptions) -> Result<String, Error> {
        check_language(options.language)?;
        if let Some(path) = self.find_malformed() {
            return Err(self.malformed_error(&path));
        }
        Ok(english(self, options.div_as_fraction))
    }
}

impl Equation {
    /// Reads the equation aloud as prose, as in "y equals 2 x plus 1".
    ///
    /// Fails in the same cases as [`Expr::to_english`].
    pub fn to_english(&self, options: ProseOptions) -> Result<String, Error> {
        check_language(options.language)?;
        if let Some(path) = self.find_malformed() {
            return Err(Error::new(self.span_of(&path).into_iter().collect(), MalformedOperator));
        }
        Ok(format!(
            "{} equals {}",
            english(&self.lhs, options.div_as_fraction),
            english(&self.rhs, options.div_as_fraction),
        ))
    }
}

//! Operators and function kinds that can appear in an expression tree.
//!
//! Every enum here has an `Unspecified` variant standing in for an operator that was never set or
//! could not be recognized by the producer of the tree. Such nodes are representable so that they
//! can be reported as malformed instead of being silently dropped.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary negation (`-`) and unary plus (`+`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Precedence of atoms, such as literals, variables, function calls and explicit groups, which
    /// never need parentheses.
    Atom,
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,

    /// An operator that is unset or unrecognized.
    #[cfg_attr(feature = "serde", serde(other))]
    Unspecified,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
            Self::Unspecified => Precedence::Any,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Unspecified => Associativity::Left,
        }
    }

    /// Returns true if the operation is both commutative and associative.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Self::Add | Self::Mul)
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether this is a multiplication written without an operator, such as `2x`.
    ///
    /// This only affects rendering.
    #[cfg_attr(feature = "serde", serde(default))]
    pub implicit: bool,
}

impl BinOp {
    /// Creates an explicit binary operator of the given kind.
    pub fn new(kind: BinOpKind) -> Self {
        Self { kind, implicit: false }
    }

    /// Creates an implicit multiplication operator.
    pub fn implicit_mul() -> Self {
        Self { kind: BinOpKind::Mul, implicit: true }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl From<BinOpKind> for BinOp {
    fn from(kind: BinOpKind) -> Self {
        Self::new(kind)
    }
}

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
    Pos,

    /// An operator that is unset or unrecognized.
    #[cfg_attr(feature = "serde", serde(other))]
    Unspecified,
}

impl UnaryOpKind {
    /// Returns the precedence of the unary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Neg | Self::Pos => Precedence::Neg,
            Self::Unspecified => Precedence::Any,
        }
    }

    /// Returns the symbol used to write the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Unspecified => "?",
        }
    }
}

/// The function applied by a function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionKind {
    /// The principal (non-negative) square root.
    SquareRoot,

    /// A function that is unset or unrecognized.
    #[cfg_attr(feature = "serde", serde(other))]
    Unspecified,
}

impl FunctionKind {
    /// Returns the name of the function in plain-text notation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SquareRoot => "sqrt",
            Self::Unspecified => "?",
        }
    }
}

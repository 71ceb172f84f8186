//! The expression tree.

pub mod binary;
pub mod call;
pub mod equation;
pub mod expr;
pub mod group;
pub mod op;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use equation::Equation;
pub use expr::Expr;
pub use group::Group;
pub use op::{Associativity, BinOp, BinOpKind, FunctionKind, Precedence, UnaryOpKind};
pub use unary::Unary;

use mathexpr_ast::{ast::Equation, Expr};
use mathexpr_error::{Error, ErrorKind};
use std::ops::Range;

/// The tree a [`Ctxt`] walks.
#[derive(Debug, Clone, Copy)]
pub enum Root<'a> {
    Expr(&'a Expr),
    Equation(&'a Equation),
}

impl Root<'_> {
    fn span_of(&self, path: &[usize]) -> Option<Range<usize>> {
        match self {
            Root::Expr(expr) => expr.span_of(path),
            Root::Equation(equation) => equation.span_of(path),
        }
    }
}

/// Tracks the position of the node being visited inside the tree, so that errors can point at
/// the offending node.
#[derive(Debug, Clone)]
pub struct Ctxt<'a> {
    root: Root<'a>,
    path: Vec<usize>,
}

impl<'a> Ctxt<'a> {
    /// Creates a context positioned at the root of the expression.
    pub fn new(root: &'a Expr) -> Self {
        Self { root: Root::Expr(root), path: Vec::new() }
    }

    /// Creates a context positioned at one side of the equation (`0` for the left-hand side, `1`
    /// for the right-hand side).
    pub fn for_side(equation: &'a Equation, side: usize) -> Self {
        Self { root: Root::Equation(equation), path: vec![side] }
    }

    /// The path from the root to the node being visited.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Runs `f` with the context positioned at the given child of the current node.
    pub fn with_child<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(index);
        let result = f(self);
        self.path.pop();
        result
    }

    /// The byte range of the current node in the plain-text rendering of the root.
    pub fn span(&self) -> Vec<Range<usize>> {
        self.root.span_of(&self.path).into_iter().collect()
    }

    /// The byte range of the given child of the current node.
    pub fn child_span(&self, index: usize) -> Vec<Range<usize>> {
        let mut path = self.path.clone();
        path.push(index);
        self.root.span_of(&path).into_iter().collect()
    }

    /// Builds an error pointing at the current node.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(self.span(), kind)
    }

    /// Builds an error pointing at the given child of the current node.
    pub fn child_error(&self, index: usize, kind: impl ErrorKind + 'static) -> Error {
        Error::new(self.child_span(index), kind)
    }
}

#[cfg(test)]
mod tests {
    use mathexpr_ast::error::MalformedOperator;
    use super::*;

    #[test]
    fn spans_follow_path() {
        let expr = Expr::add(Expr::int(12), Expr::var("x"));
        let mut ctxt = Ctxt::new(&expr);
        assert_eq!(ctxt.span(), vec![0..4]);
        let span = ctxt.with_child(1, |ctxt| ctxt.span());
        assert_eq!(span, vec![3..4]);
        assert_eq!(ctxt.path(), &[] as &[usize]);
        assert_eq!(ctxt.child_error(0, MalformedOperator).spans, vec![0..2]);
    }

    #[test]
    fn equation_side() {
        let equation = Equation::new(Expr::var("y"), Expr::int(3));
        let ctxt = Ctxt::for_side(&equation, 1);
        assert_eq!(ctxt.span(), vec![4..5]);
    }
}

//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors produced by the expression engine point at one or more nodes of the expression tree
//! that caused them. Those nodes are identified by their byte range in the plain-text rendering
//! of the tree (for example `3x+6`), so an error can be shown to a learner as a report that
//! underlines the offending part of their answer.

// lets the `ErrorKind` derive refer to this crate by name in its own tests
extern crate self as mathexpr_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns this error kind as [`Any`], so callers can branch on the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of an expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the rendered expression that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<T>()
    }

    /// Returns the kind of this error as `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer, using `src` as the rendered
    /// expression the spans point into.
    pub fn write_report<W: io::Write>(&self, src_id: &str, src: &str, writer: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(src)), writer)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use mathexpr_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` has no value", self.name),
        labels = ["this variable"],
        help = "substitute a number for it first",
    )]
    struct Unbound {
        name: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to see")]
    struct Plain;

    #[derive(Debug, ErrorKind)]
    #[error(labels = [format!("found {:?}", found), String::new()])]
    struct Mismatch<T: Debug + Send + Sync + 'static> {
        found: T,
    }

    #[test]
    fn message_uses_fields() {
        let err = Error::new(vec![2..3], Unbound { name: "x".to_string() });
        assert_eq!(err.to_string(), "`x` has no value");
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Plain);
        assert!(err.is::<Plain>());
        assert!(!err.is::<Unbound>());
        assert!(err.downcast_ref::<Unbound>().is_none());
    }

    #[test]
    fn report_underlines_span() {
        let err = Error::new(vec![2..3], Unbound { name: "x".to_string() });
        let mut out = Vec::new();
        err.write_report("input", "2+x", &mut out).unwrap();

        let stripped = strip_ansi_escapes::strip(out);
        let text = String::from_utf8(stripped).unwrap();
        assert!(text.contains("`x` has no value"));
        assert!(text.contains("this variable"));
        assert!(text.contains("substitute a number for it first"));
    }

    #[test]
    fn defaults_and_generic_fields() {
        let err = Error::new(vec![0..1, 2..3], Mismatch { found: 7 });
        assert_eq!(err.to_string(), "Mismatch");
        assert!(err.is::<Mismatch<i32>>());

        let mut out = Vec::new();
        err.write_report("input", "7=x", &mut out).unwrap();
        let text = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(text.contains("found 7"));
    }
}

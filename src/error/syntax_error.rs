use std::fmt;

use crate::{error::write_diagnostic, interpreter::position::Span};

/// The parser found a token it did not expect, or did not find one it
/// required.
///
/// The message always names what was expected, e.g. `Expected ')'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// The token the parser stopped at.
    pub span:    Span,
    /// What was expected instead.
    pub details: String,
}

impl SyntaxError {
    pub const KIND: &'static str = "SyntaxError";

    #[must_use]
    pub fn new(span: Span, details: impl Into<String>) -> Self {
        Self { span,
               details: details.into() }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, Self::KIND, &self.details, &self.span)
    }
}

impl std::error::Error for SyntaxError {}

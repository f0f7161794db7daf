use std::fmt;

use crate::{error::write_diagnostic, interpreter::position::Span};

/// The lexer met input it cannot turn into a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharError {
    /// The offending character (or oversized literal).
    pub span:    Span,
    /// What went wrong, e.g. `Unexpected '@'`.
    pub details: String,
}

impl CharError {
    pub const KIND: &'static str = "CharError";

    #[must_use]
    pub fn new(span: Span, details: impl Into<String>) -> Self {
        Self { span,
               details: details.into() }
    }
}

impl fmt::Display for CharError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_diagnostic(f, Self::KIND, &self.details, &self.span)
    }
}

impl std::error::Error for CharError {}

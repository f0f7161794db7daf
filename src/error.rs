use std::fmt;

use crate::interpreter::position::Span;

/// Lexical errors.
///
/// Raised by the lexer when it meets a character that cannot start a token,
/// or an integer literal too large to represent.
pub mod char_error;
/// Runtime errors.
///
/// Raised while evaluating the syntax tree: undefined variables, division by
/// zero and integer overflow. Runtime errors carry a traceback of the
/// contexts that were active when evaluation failed.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised by the parser for unexpected or missing tokens, unmatched
/// parentheses, and trailing input after a complete expression.
pub mod syntax_error;

pub use char_error::CharError;
pub use runtime_error::{Frame, RuntimeError};
pub use syntax_error::SyntaxError;

use crate::util::excerpt::render_excerpt;

/// Any error produced by [`run`](crate::run) or one of its stages.
///
/// The [`Display`](fmt::Display) output is the full, multi-line diagnostic:
/// the error kind and message, the location, and a marked excerpt of the
/// offending source.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The lexer rejected the input.
    Char(CharError),
    /// The parser rejected the token stream.
    Syntax(SyntaxError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// The name of the error kind: `CharError`, `SyntaxError` or
    /// `RuntimeError`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Char(_) => CharError::KIND,
            Self::Syntax(_) => SyntaxError::KIND,
            Self::Runtime(_) => RuntimeError::KIND,
        }
    }

    /// The human-readable message, without location information.
    #[must_use]
    pub fn details(&self) -> &str {
        match self {
            Self::Char(e) => &e.details,
            Self::Syntax(e) => &e.details,
            Self::Runtime(e) => &e.details,
        }
    }

    /// The source span the error points at.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Char(e) => &e.span,
            Self::Syntax(e) => &e.span,
            Self::Runtime(e) => &e.span,
        }
    }
}

impl From<CharError> for Error {
    fn from(error: CharError) -> Self {
        Self::Char(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Char(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

/// Writes the diagnostic shared by the lexical and syntax errors:
///
/// ```text
/// <kind>: <details>
///   at <file>:<line>:<column>
/// <source line>
/// <marker line>
/// ```
pub(crate) fn write_diagnostic(f: &mut fmt::Formatter<'_>,
                               kind: &str,
                               details: &str,
                               span: &Span)
                               -> fmt::Result {
    writeln!(f, "{kind}: {details}")?;
    writeln!(f, "  at {}", span.start)?;
    write!(f,
           "{}",
           render_excerpt(span.start.source_text(), &span.start, &span.end))
}

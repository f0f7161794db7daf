use std::fmt;

use crate::{
    interpreter::position::{Position, Span},
    util::excerpt::render_excerpt,
};

/// One entry of a runtime traceback: where execution was inside which
/// context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The position execution had reached in this frame.
    pub position:     Position,
    /// The display name of the frame's context, such as `<program>`.
    pub display_name: String,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {} in {}", self.position, self.display_name)
    }
}

/// Evaluation failed.
///
/// Besides the failing span, a runtime error records the chain of contexts
/// that was active at the failure site, oldest frame first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// The expression whose evaluation failed.
    pub span:      Span,
    /// What went wrong, e.g. `Cannot divide by zero`.
    pub details:   String,
    /// Frames from the outermost context down to the failure site.
    pub traceback: Vec<Frame>,
}

impl RuntimeError {
    pub const KIND: &'static str = "RuntimeError";

    #[must_use]
    pub fn new(span: Span, details: impl Into<String>, traceback: Vec<Frame>) -> Self {
        Self { span,
               details: details.into(),
               traceback }
    }

    /// Renders only the traceback block.
    ///
    /// ```text
    /// Traceback (most recent call last):
    ///   at <file>:<line>:<column> in <context>
    /// ```
    #[must_use]
    pub fn generate_traceback(&self) -> String {
        let mut result = String::from("Traceback (most recent call last):");
        for frame in &self.traceback {
            result.push_str("\n  ");
            result.push_str(&frame.to_string());
        }
        result
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.generate_traceback())?;
        writeln!(f, "{}: {}", Self::KIND, self.details)?;
        write!(f,
               "{}",
               render_excerpt(self.span.start.source_text(), &self.span.start, &self.span.end))
    }
}

impl std::error::Error for RuntimeError {}

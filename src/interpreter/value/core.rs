use std::fmt;

use crate::{
    interpreter::{position::Span, scope::ContextId},
    util::num::i64_to_f64,
};

/// The numeric payload of a value: an integer or a float.
///
/// Arithmetic keeps integers exact for as long as both operands are
/// integers and promotes to floating point otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl NumberValue {
    /// Converts the value to an `f64`, promoting integers.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => i64_to_f64(n),
            Self::Float(x) => x,
        }
    }

    /// Returns `true` for integer and floating zero alike.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Float(x) => x == 0.0,
        }
    }
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for NumberValue {
    /// Integers print as-is; floats always show a fractional part (`2.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// A runtime value.
///
/// Besides the number itself, a value remembers where it came from: the
/// span of the expression that produced it and the context it was evaluated
/// in. Both are informational and never affect arithmetic.
///
/// Values are produced fresh by every operation. Reading a variable hands
/// out a restamped copy, so the stored binding is never touched by the
/// caller.
#[derive(Debug, Clone)]
pub struct Number {
    value:   NumberValue,
    span:    Option<Span>,
    context: Option<ContextId>,
}

impl Number {
    /// Creates an unpositioned value.
    #[must_use]
    pub fn new(value: impl Into<NumberValue>) -> Self {
        Self { value:   value.into(),
               span:    None,
               context: None, }
    }

    /// Returns the value stamped with `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the value stamped with `context`.
    #[must_use]
    pub fn with_context(mut self, context: ContextId) -> Self {
        self.context = Some(context);
        self
    }

    /// The numeric payload.
    #[must_use]
    pub const fn value(&self) -> NumberValue {
        self.value
    }

    /// The span of the expression that produced this value, if any.
    #[must_use]
    pub const fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    /// The context this value was produced in, if any.
    #[must_use]
    pub const fn context(&self) -> Option<ContextId> {
        self.context
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

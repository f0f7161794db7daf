use std::fmt;

use crate::interpreter::{position::Span, value::core::NumberValue};

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children, so a parsed program is a strict tree. The
/// token information each node keeps (names, operators and their spans) is
/// only used for diagnostics; evaluation looks at values and operators alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: NumberValue,
        /// Span of the literal token.
        span:  Span,
    },
    /// Reading a variable.
    VarAccess {
        /// Name of the variable.
        name: String,
        /// Span of the name token.
        span: Span,
    },
    /// `def <name> : <value>`
    VarAssign {
        /// Name of the variable being defined.
        name:      String,
        /// Span of the name token.
        name_span: Span,
        /// Expression producing the value.
        value:     Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:    Box<Self>,
        /// The operator.
        op:      BinaryOperator,
        /// Span of the operator token.
        op_span: Span,
        /// Right operand.
        right:   Box<Self>,
    },
    /// A prefix operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// Span of the operator token.
        op_span: Span,
        /// The operand expression.
        operand: Box<Self>,
    },
}

impl Node {
    /// Returns the span covering this node and all of its children.
    ///
    /// ## Example
    /// ```
    /// let node = quartz::parse("<stdin>", "-(1 + 2)").unwrap();
    /// let span = node.span();
    ///
    /// // Parentheses only group; they are not part of any node.
    /// assert_eq!(span.start.column, 0);
    /// assert_eq!(span.end.column, 7);
    /// ```
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Number { span, .. } | Self::VarAccess { span, .. } => span.clone(),
            Self::VarAssign { name_span, value, .. } => name_span.to(&value.span()),
            Self::BinaryOp { left, right, .. } => left.span().to(&right.span()),
            Self::UnaryOp { op_span, operand, .. } => op_span.to(&operand.span()),
        }
    }
}

impl fmt::Display for Node {
    /// Prints the tree fully parenthesized, e.g. `(1 + (2 * 3))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::VarAccess { name, .. } => write!(f, "{name}"),
            Self::VarAssign { name, value, .. } => write!(f, "(def {name} : {value})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`; evaluates to `x`.
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// `%x`; accepted for symmetry with the binary operator, evaluates to
    /// `x`.
    Percent,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Percent => "%",
        };
        write!(f, "{operator}")
    }
}

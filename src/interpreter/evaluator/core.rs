use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        position::Span,
        scope::{ContextId, Scopes},
        value::core::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result type of the pure arithmetic routines, which know nothing about
/// spans or contexts.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// An arithmetic operation that has no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or modulo by zero, or zero raised to a negative power.
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    Overflow,
}

impl ArithmeticError {
    /// The message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by zero",
            Self::Overflow => "Integer overflow while computing result",
        }
    }
}

/// Tree-walking evaluator.
///
/// The interpreter borrows the scope arena of a session for the duration of
/// one evaluation. Each node kind has exactly one evaluation rule; the match
/// in [`visit`](Self::visit) is exhaustive, so adding a node kind without a
/// rule does not compile.
///
/// ## Usage
/// ```
/// use quartz::{Session, interpreter::evaluator::core::Interpreter, parse};
///
/// let mut session = Session::new();
/// let context = session.root_context();
/// let ast = parse("<stdin>", "2 ^ 3 ^ 2").unwrap();
///
/// let result = Interpreter::new(session.scopes_mut()).visit(&ast, context).unwrap();
/// assert_eq!(result.to_string(), "512");
/// ```
pub struct Interpreter<'s> {
    scopes: &'s mut Scopes,
}

impl<'s> Interpreter<'s> {
    pub const fn new(scopes: &'s mut Scopes) -> Self {
        Self { scopes }
    }

    /// Evaluates `node` in `context`.
    ///
    /// Every result is a fresh value stamped with the span of `node` and
    /// with `context`.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised anywhere in the subtree. Operands
    /// are evaluated left to right and evaluation stops at the first error.
    pub fn visit(&mut self, node: &Node, context: ContextId) -> EvalResult<Number> {
        match node {
            Node::Number { value, span } => {
                Ok(Number::new(*value).with_span(span.clone()).with_context(context))
            },
            Node::VarAccess { name, span } => self.visit_var_access(name, span, context),
            Node::VarAssign { name, value, .. } => self.visit_var_assign(name, value, context),
            Node::BinaryOp { left, op, right, .. } => {
                self.visit_binary_op(node, left, *op, right, context)
            },
            Node::UnaryOp { op, operand, .. } => self.visit_unary_op(node, *op, operand, context),
        }
    }

    /// Reads a variable through the symbol table chain of `context`.
    ///
    /// Any binding counts, including one whose value is zero.
    fn visit_var_access(&self,
                        name: &str,
                        span: &Span,
                        context: ContextId)
                        -> EvalResult<Number> {
        let table = self.scopes.context(context).symbol_table;

        match self.scopes.lookup(table, name) {
            Some(value) => Ok(value.clone().with_span(span.clone()).with_context(context)),
            None => Err(self.runtime_error(span.clone(), format!("'{name}' is not defined"), context)),
        }
    }

    /// Evaluates `value` and binds it to `name` in the table of `context`
    /// itself, never in a parent table.
    fn visit_var_assign(&mut self,
                        name: &str,
                        value: &Node,
                        context: ContextId)
                        -> EvalResult<Number> {
        let value = self.visit(value, context)?;
        let table = self.scopes.context(context).symbol_table;

        tracing::debug!(name, value = %value, "defining variable");
        self.scopes.table_mut(table).set(name, value.clone());

        Ok(value)
    }

    fn visit_binary_op(&mut self,
                       node: &Node,
                       left: &Node,
                       op: BinaryOperator,
                       right: &Node,
                       context: ContextId)
                       -> EvalResult<Number> {
        let left_value = self.visit(left, context)?;
        let right_value = self.visit(right, context)?;

        match Self::eval_binary(op, left_value.value(), right_value.value()) {
            Ok(result) => Ok(Number::new(result).with_span(node.span()).with_context(context)),
            Err(fault) => {
                let span = match fault {
                    ArithmeticError::DivisionByZero => right.span(),
                    ArithmeticError::Overflow => node.span(),
                };
                let context = left_value.context().unwrap_or(context);
                Err(self.runtime_error(span, fault.message(), context))
            },
        }
    }

    fn visit_unary_op(&mut self,
                      node: &Node,
                      op: UnaryOperator,
                      operand: &Node,
                      context: ContextId)
                      -> EvalResult<Number> {
        let value = self.visit(operand, context)?;

        match Self::eval_unary(op, value.value()) {
            Ok(result) => Ok(Number::new(result).with_span(node.span()).with_context(context)),
            Err(fault) => Err(self.runtime_error(node.span(), fault.message(), context)),
        }
    }

    /// Builds a [`RuntimeError`] at `span` carrying the traceback of
    /// `context`.
    #[must_use]
    pub fn runtime_error(&self,
                         span: Span,
                         details: impl Into<String>,
                         context: ContextId)
                         -> RuntimeError {
        let traceback = self.scopes.traceback(context, &span.start);
        RuntimeError::new(span, details, traceback)
    }
}

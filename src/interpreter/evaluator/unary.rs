use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{ArithmeticError, ArithmeticResult, Interpreter},
        value::core::NumberValue,
    },
};

impl Interpreter<'_> {
    /// Evaluates a prefix operation on a number.
    ///
    /// `-` multiplies the operand by `-1`. `+` and `%` leave it unchanged.
    ///
    /// # Errors
    /// [`ArithmeticError::Overflow`] when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use quartz::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::NumberValue},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, NumberValue::Int(5));
    /// assert_eq!(v, Ok(NumberValue::Int(-5)));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Percent, NumberValue::Float(1.5));
    /// assert_eq!(v, Ok(NumberValue::Float(1.5)));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: NumberValue) -> ArithmeticResult<NumberValue> {
        match op {
            UnaryOperator::Negate => match value {
                NumberValue::Int(n) => {
                    n.checked_mul(-1).map(NumberValue::Int).ok_or(ArithmeticError::Overflow)
                },
                NumberValue::Float(x) => Ok(NumberValue::Float(x * -1.0)),
            },
            UnaryOperator::Plus | UnaryOperator::Percent => Ok(value),
        }
    }
}

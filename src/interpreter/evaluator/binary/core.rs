use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{ArithmeticResult, Interpreter},
        value::core::NumberValue,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two numbers.
    ///
    /// `+`, `-`, `*`, `/` and `%` go to [`eval_scalar_op`](Self::eval_scalar_op);
    /// `^` goes to [`eval_pow`](Self::eval_pow).
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed number, or the arithmetic fault that prevented it.
    ///
    /// # Example
    /// ```
    /// use quartz::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::NumberValue},
    /// };
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       NumberValue::Int(3),
    ///                                       NumberValue::Int(4));
    /// assert_eq!(result, Ok(NumberValue::Int(7)));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: NumberValue,
                       right: NumberValue)
                       -> ArithmeticResult<NumberValue> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right),
            Pow => Self::eval_pow(left, right),
        }
    }
}

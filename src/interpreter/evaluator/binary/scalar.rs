use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{ArithmeticError, ArithmeticResult, Interpreter},
        value::core::NumberValue,
    },
    util::num::is_exact_f64,
};

impl Interpreter<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Two integers stay integers for `+`, `-`, `*` and `%`, with checked
    /// arithmetic. Division always produces a float. As soon as one operand
    /// is a float, both are promoted and the float operation is used.
    ///
    /// Modulo is floored: the result has the sign of the divisor, so
    /// `-7 % 3` is `2`.
    ///
    /// # Errors
    /// - [`ArithmeticError::DivisionByZero`] for `/` or `%` by zero.
    /// - [`ArithmeticError::Overflow`] when integer arithmetic leaves the
    ///   64-bit range.
    ///
    /// # Example
    /// ```
    /// use quartz::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::core::{ArithmeticError, Interpreter},
    ///         value::core::NumberValue,
    ///     },
    /// };
    ///
    /// let x = NumberValue::Int(7);
    /// let y = NumberValue::Int(2);
    ///
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Div, x, y);
    /// assert_eq!(result, Ok(NumberValue::Float(3.5)));
    ///
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Mod, x, NumberValue::Int(0));
    /// assert_eq!(result, Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: NumberValue,
                          right: NumberValue)
                          -> ArithmeticResult<NumberValue> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        use NumberValue::{Float, Int};

        if matches!(op, Div | Mod) && right.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        match (left, right) {
            (Int(a), Int(b)) => match op {
                Add => a.checked_add(b).map(Int).ok_or(ArithmeticError::Overflow),
                Sub => a.checked_sub(b).map(Int).ok_or(ArithmeticError::Overflow),
                Mul => a.checked_mul(b).map(Int).ok_or(ArithmeticError::Overflow),
                Div => Ok(Float(promote(left) / promote(right))),
                Mod => Ok(Int(floored_rem(a, b))),
                Pow => Self::eval_pow(left, right),
            },
            _ => {
                let (a, b) = (promote(left), promote(right));

                Ok(Float(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             Div => a / b,
                             Mod => floored_rem_f64(a, b),
                             Pow => return Self::eval_pow(left, right),
                         }))
            },
        }
    }
}

/// Converts an operand to `f64`, noting when the integer does not survive
/// the conversion exactly.
fn promote(value: NumberValue) -> f64 {
    if let NumberValue::Int(n) = value
       && !is_exact_f64(n)
    {
        tracing::trace!(value = n, "integer operand rounded during promotion");
    }
    value.as_f64()
}

/// Integer remainder with the sign of the divisor. `b` must be non-zero.
///
/// The only other case `checked_rem` rejects is `i64::MIN % -1`, which is
/// `0`.
fn floored_rem(a: i64, b: i64) -> i64 {
    let r = a.checked_rem(b).unwrap_or(0);
    if r != 0 && (r < 0) != (b < 0) { r + b } else { r }
}

/// Float remainder with the sign of the divisor.
fn floored_rem_f64(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

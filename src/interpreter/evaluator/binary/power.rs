use crate::{
    interpreter::{
        evaluator::core::{ArithmeticError, ArithmeticResult, Interpreter},
        value::core::NumberValue,
    },
    util::num::i64_to_u32_checked,
};

impl Interpreter<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// An integer raised to a non-negative integer is computed exactly with
    /// checked arithmetic. Negative integer exponents and float operands are
    /// computed with `powf`.
    ///
    /// # Errors
    /// - [`ArithmeticError::Overflow`] when an exact integer power does not
    ///   fit in 64 bits.
    /// - [`ArithmeticError::DivisionByZero`] for zero raised to a negative
    ///   power.
    ///
    /// # Example
    /// ```
    /// use quartz::interpreter::{evaluator::core::Interpreter, value::core::NumberValue};
    ///
    /// let result = Interpreter::eval_pow(NumberValue::Int(2), NumberValue::Int(10));
    /// assert_eq!(result, Ok(NumberValue::Int(1024)));
    ///
    /// let result = Interpreter::eval_pow(NumberValue::Int(2), NumberValue::Int(-1));
    /// assert_eq!(result, Ok(NumberValue::Float(0.5)));
    /// ```
    pub fn eval_pow(base: NumberValue, exponent: NumberValue) -> ArithmeticResult<NumberValue> {
        use NumberValue::{Float, Int};

        if base.is_zero() && exponent.as_f64() < 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        match (base, exponent) {
            (Int(b), Int(e)) if e >= 0 => match i64_to_u32_checked(e) {
                Some(e) => b.checked_pow(e).map(Int).ok_or(ArithmeticError::Overflow),
                None => match b {
                    0 | 1 => Ok(Int(b)),
                    -1 => Ok(Int(if e % 2 == 0 { 1 } else { -1 })),
                    _ => Err(ArithmeticError::Overflow),
                },
            },
            _ => Ok(Float(base.as_f64().powf(exponent.as_f64()))),
        }
    }
}

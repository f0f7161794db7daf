/// Core evaluation logic and the interpreter.
///
/// Contains the tree walker, variable access and definition, and the
/// conversion of arithmetic faults into runtime errors.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the arithmetic operators on integer and floating-point
/// operands, including promotion, floored modulo and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and the inert prefix operators `+` and `%`.
pub mod unary;

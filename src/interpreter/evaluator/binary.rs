/// Operator dispatch.
///
/// Routes each binary operator to its arithmetic routine.
pub mod core;

/// Addition, subtraction, multiplication, division and modulo.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Runtime numbers.
///
/// Defines [`NumberValue`](core::NumberValue), the integer-or-float payload
/// shared by literals and results, and [`Number`](core::Number), the runtime
/// value that also remembers the span and context it was produced in.
pub mod core;

/// Numeric conversion helpers.
///
/// Conversions between `i64`, `u32` and `f64` used by the arithmetic
/// routines, kept in one place so every lossy cast is explicit.
pub mod num;

/// Caret excerpts.
///
/// Renders the source line(s) under a span, followed by a marker line that
/// points at the exact columns. Every diagnostic ends with such an excerpt.
pub mod excerpt;

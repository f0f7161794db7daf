/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Promotes an integer operand to floating point.
///
/// Promotion follows host arithmetic, so integers beyond
/// [`MAX_SAFE_U64_INT`] round to the nearest representable `f64`.
///
/// ## Example
/// ```
/// use quartz::util::num::{MAX_SAFE_U64_INT, i64_to_f64, is_exact_f64};
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert!(is_exact_f64(42));
/// assert!(!is_exact_f64(MAX_SAFE_U64_INT as i64 + 1));
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Returns `true` when `value` survives promotion to `f64` unchanged.
#[must_use]
pub const fn is_exact_f64(value: i64) -> bool {
    value.unsigned_abs() <= MAX_SAFE_U64_INT
}

/// Converts a non-negative integer exponent to `u32`.
///
/// ## Returns
/// - `Some(u32)`: If `value` lies in `0..=u32::MAX`.
/// - `None`: If the value is negative or too large.
///
/// ## Example
/// ```
/// use quartz::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(10), Some(10));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::from(u32::MAX) + 1), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

//! Clamping and linear range mapping.

use crate::float::TaperFloat;
use crate::range::FloatRange;

/// Clamps `value` into `range`: `min(max(value, lower), upper)`.
///
/// NaN input yields `range.lower()` because `max` prefers the non-NaN operand.
///
/// # Example
///
/// ```
/// use float_ext::{FloatRange, clamp};
///
/// let range = FloatRange::new(0.0, 10.0);
/// assert_eq!(clamp(12.5, range), 10.0);
/// assert_eq!(clamp(-3.0, range), 0.0);
/// ```
#[inline]
pub fn clamp<T: TaperFloat>(value: T, range: FloatRange<T>) -> T {
    value.max(range.lower()).min(range.upper())
}

/// Maps `value` linearly from `src` onto `dst`.
///
/// `(value - src.lower) / src.size * dst.size + dst.lower`. The value is not
/// clamped, and a zero-size `src` produces a non-finite result.
///
/// # Example
///
/// ```
/// use float_ext::{FloatRange, linear_map};
///
/// let mapped = linear_map(5.0f64, FloatRange::new(0.0, 10.0), FloatRange::new(100.0, 200.0));
/// assert!((mapped - 150.0).abs() < 1e-12);
/// ```
#[inline]
pub fn linear_map<T: TaperFloat>(value: T, src: FloatRange<T>, dst: FloatRange<T>) -> T {
    (value - src.lower()) / src.size() * dst.size() + dst.lower()
}

//! Method-call syntax for the free functions.

use crate::float::TaperFloat;
use crate::map::{clamp, linear_map};
use crate::range::FloatRange;
use crate::round::{round, trailing_digits, truncate};
use crate::taper::{TaperCurve, denormalize, normalize};

/// Extension methods on `f32` and `f64`.
///
/// # Example
///
/// ```
/// use float_ext::prelude::*;
///
/// let range = FloatRange::new(-10.0, 10.0);
/// let x = 5.0_f64.normalized(range, 0.1, true);
/// assert!((x.denormalized(range, 0.1, true) - 5.0).abs() < 1e-7);
///
/// assert_eq!(12.5_f64.clamped(range), 10.0);
/// assert_eq!(1.2350_f64.rounded(2), 1.24);
/// ```
pub trait FloatExt: TaperFloat {
    /// See [`clamp`].
    fn clamped(self, range: FloatRange<Self>) -> Self {
        clamp(self, range)
    }

    /// See [`linear_map`].
    fn mapped(self, src: FloatRange<Self>, dst: FloatRange<Self>) -> Self {
        linear_map(self, src, dst)
    }

    /// See [`normalize`].
    fn normalized(self, range: FloatRange<Self>, taper: Self, around_center: bool) -> Self {
        normalize(self, range, taper, around_center)
    }

    /// See [`denormalize`].
    fn denormalized(self, range: FloatRange<Self>, taper: Self, around_center: bool) -> Self {
        denormalize(self, range, taper, around_center)
    }

    /// [`normalize`] with a stored [`TaperCurve`].
    fn normalized_with(self, range: FloatRange<Self>, curve: &TaperCurve) -> Self {
        curve.normalize(self, range)
    }

    /// [`denormalize`] with a stored [`TaperCurve`].
    fn denormalized_with(self, range: FloatRange<Self>, curve: &TaperCurve) -> Self {
        curve.denormalize(self, range)
    }

    /// See [`round`].
    fn rounded(self, digits: u32) -> Self {
        round(self, digits)
    }

    /// See [`truncate`].
    fn truncated(self, digits: u32) -> Self {
        truncate(self, digits)
    }

    /// See [`trailing_digits`].
    fn trailing_digits(self) -> Self {
        trailing_digits(self)
    }
}

impl FloatExt for f32 {}
impl FloatExt for f64 {}

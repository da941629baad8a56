//! Closed floating-point ranges and their derived attributes.

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{FloatExtError, FloatExtResult};
use crate::float::TaperFloat;

/// Closed range `[lower, upper]` over a floating-point type.
///
/// The range is expected to satisfy `lower <= upper`. [`new`](Self::new) does
/// not check this, matching the propagate-don't-trap policy of the mapping
/// functions; use [`try_new`](Self::try_new) when the bounds come from
/// untrusted input.
///
/// # Example
///
/// ```
/// use float_ext::FloatRange;
///
/// let range = FloatRange::new(-10.0, 10.0);
/// assert_eq!(range.size(), 20.0);
/// assert_eq!(range.midpoint(), 0.0);
/// assert_eq!(range.upper_half().lower(), 0.0);
/// assert!(range.lower_half().upper() < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange<T> {
    lower: T,
    upper: T,
}

impl<T: TaperFloat> FloatRange<T> {
    /// Creates a range without validating the bounds.
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Creates a range, rejecting non-finite or inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FloatExtError::NonFiniteBound`] if either bound is NaN or
    /// infinite, and [`FloatExtError::InvertedRange`] if `lower > upper`.
    pub fn try_new(lower: T, upper: T) -> FloatExtResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(FloatExtError::NonFiniteBound {
                lower: lower.widen(),
                upper: upper.widen(),
            });
        }
        if lower > upper {
            return Err(FloatExtError::InvertedRange {
                lower: lower.widen(),
                upper: upper.widen(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// The normalized domain `[0, 1]`.
    pub fn unit() -> Self {
        Self {
            lower: T::zero(),
            upper: T::one(),
        }
    }

    /// Lower bound.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// `upper - lower`.
    #[inline]
    pub fn size(&self) -> T {
        self.upper - self.lower
    }

    /// `(lower + upper) / 2`.
    #[inline]
    pub fn midpoint(&self) -> T {
        (self.lower + self.upper) / T::TWO
    }

    /// `[midpoint, upper]`.
    pub fn upper_half(&self) -> Self {
        Self {
            lower: self.midpoint(),
            upper: self.upper,
        }
    }

    /// `[lower, m]` where `m` is the largest value strictly below the midpoint.
    ///
    /// Together with [`upper_half`](Self::upper_half) this partitions the
    /// range: the halves are disjoint and every value of the range falls in
    /// exactly one of them.
    pub fn lower_half(&self) -> Self {
        Self {
            lower: self.lower,
            upper: self.midpoint().next_down(),
        }
    }

    /// Returns `true` if `value` lies within the closed range.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns `true` if `lower <= upper` and both bounds are finite.
    pub fn is_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower <= self.upper
    }

    /// Widens both bounds to `f64`.
    pub fn widen(&self) -> FloatRange<f64> {
        FloatRange {
            lower: self.lower.widen(),
            upper: self.upper.widen(),
        }
    }
}

impl<T: TaperFloat> Default for FloatRange<T> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<T: TaperFloat> From<RangeInclusive<T>> for FloatRange<T> {
    fn from(range: RangeInclusive<T>) -> Self {
        let (lower, upper) = range.into_inner();
        Self::new(lower, upper)
    }
}

impl<T: TaperFloat> From<FloatRange<T>> for RangeInclusive<T> {
    fn from(range: FloatRange<T>) -> Self {
        range.lower..=range.upper
    }
}

//! Taper curve normalization and denormalization.
//!
//! A taper `t` in `(0, 1)` shapes the mapping between the normalized domain
//! `[0, 1]` and a target range:
//!
//! ```text
//! b = (1/t - 1)^2
//! a = 1 / (b - 1)
//! y = a * b^x - a
//! ```
//!
//! `t = 0.5` is the straight line. Smaller tapers bend the curve towards the
//! lower end of the range (logarithmic feel on a control), larger ones
//! towards the upper end.
//!
//! With `around_center` the curve is folded: the upper half of the normalized
//! domain drives the tapered curve over the upper half of the range, the lower
//! half drives its point reflection over the lower half. Both halves meet at
//! the range midpoint for a normalized value of `0.5`.
//!
//! The nonlinear math always runs in `f64` and is narrowed back to the working
//! type on return.
//!
//! # Failure semantics
//!
//! [`denormalize`] and [`normalize`] never fail. An invalid taper returns
//! `range.lower()` or `0` respectively. Out-of-domain values propagate through
//! the formulas and may come back non-finite. [`try_denormalize`] and
//! [`try_normalize`] validate their arguments instead.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{FloatExtError, FloatExtResult};
use crate::float::TaperFloat;
use crate::map::linear_map;
use crate::range::FloatRange;

/// Taper value of the straight-line curve.
pub const LINEAR_TAPER: f64 = 0.5;

#[inline]
fn is_valid_taper(taper: f64) -> bool {
    taper > 0.0 && taper < 1.0
}

#[inline]
#[expect(
    clippy::float_cmp,
    reason = "only a taper of exactly one half selects the straight line"
)]
fn is_linear_taper(taper: f64) -> bool {
    taper == LINEAR_TAPER
}

/// Curve coefficients `(a, b)` for a valid, non-linear taper.
#[inline]
fn coefficients(taper: f64) -> (f64, f64) {
    let b = (1.0 / taper - 1.0).powi(2);
    let a = 1.0 / (b - 1.0);
    (a, b)
}

/// Maps a normalized `value` onto `range` through the taper curve.
///
/// # Example
///
/// ```
/// use float_ext::{FloatRange, denormalize};
///
/// let range = FloatRange::new(20.0f64, 20000.0);
/// let hz = denormalize(0.5, range, 0.1, false);
/// assert!(hz < range.midpoint());
///
/// // Folded curves pass through the midpoint.
/// let centered = denormalize(0.5, FloatRange::new(-10.0f64, 10.0), 0.1, true);
/// assert!(centered.abs() < 1e-12);
/// ```
pub fn denormalize<T: TaperFloat>(
    value: T,
    range: FloatRange<T>,
    taper: T,
    around_center: bool,
) -> T {
    let t = taper.widen();
    if !is_valid_taper(t) {
        debug!(taper = t, "taper outside (0, 1), returning range lower bound");
        return range.lower();
    }

    if around_center {
        return if value >= T::HALF {
            // u = 2x - 1 lands in [0, 1] for x in [0.5, 1]
            let upper = value * T::TWO - T::one();
            denormalize(upper, range.upper_half(), taper, false)
        } else {
            let unit = FloatRange::unit();
            let lower = T::one() - value * T::TWO;
            let warped = denormalize(lower, unit, taper, false);
            let reflected = T::one() - warped;
            linear_map(reflected, unit, range.lower_half())
        };
    }

    if is_linear_taper(t) {
        return range.size() * value + range.lower();
    }

    let (a, b) = coefficients(t);
    let y = a * b.powf(value.widen()) - a;
    let wide = range.widen();
    T::narrow(wide.size() * y + wide.lower())
}

/// Maps `value` from `range` back onto the normalized domain.
///
/// Exact inverse of [`denormalize`] for the same `taper` and `around_center`.
///
/// With `around_center`, every value at or above the range midpoint goes
/// through the upper segment, including values past `range.upper()`. Those
/// extrapolate along the upper curve rather than falling into the lower
/// segment's reflection, so a result one ulp above the upper bound still
/// normalizes to about `1`.
///
/// # Example
///
/// ```
/// use float_ext::{FloatRange, denormalize, normalize};
///
/// let range = FloatRange::new(-10.0f64, 10.0);
/// let x = normalize(5.0, range, 0.1, true);
/// let back = denormalize(x, range, 0.1, true);
/// assert!((back - 5.0).abs() < 1e-7);
/// ```
pub fn normalize<T: TaperFloat>(
    value: T,
    range: FloatRange<T>,
    taper: T,
    around_center: bool,
) -> T {
    let t = taper.widen();
    if !is_valid_taper(t) {
        debug!(taper = t, "taper outside (0, 1), returning zero");
        return T::zero();
    }

    if around_center {
        let upper_half = range.upper_half();
        // values past the upper bound stay on the upper segment
        return if value >= upper_half.lower() {
            let unwarped = normalize(value, upper_half, taper, false);
            (unwarped + T::one()) / T::TWO
        } else {
            let unit = FloatRange::unit();
            let unmapped = linear_map(value, range.lower_half(), unit);
            let reflected = T::one() - unmapped;
            let unwarped = normalize(reflected, unit, taper, false);
            (unwarped - T::one()) / -T::TWO
        };
    }

    if is_linear_taper(t) {
        return (value - range.lower()) / range.size();
    }

    let wide = range.widen();
    let u = (value.widen() - wide.lower()) / wide.size();
    let (a, b) = coefficients(t);
    T::narrow(((u + a) / a).ln() / b.ln())
}

/// [`denormalize`] with argument validation.
///
/// # Errors
///
/// Returns [`FloatExtError::InvalidTaper`] for a taper outside `(0, 1)`, and
/// the [`FloatRange::try_new`] errors for a non-finite or inverted range.
pub fn try_denormalize<T: TaperFloat>(
    value: T,
    range: FloatRange<T>,
    taper: T,
    around_center: bool,
) -> FloatExtResult<T> {
    validate(range, taper)?;
    Ok(denormalize(value, range, taper, around_center))
}

/// [`normalize`] with argument validation.
///
/// # Errors
///
/// Same conditions as [`try_denormalize`].
pub fn try_normalize<T: TaperFloat>(
    value: T,
    range: FloatRange<T>,
    taper: T,
    around_center: bool,
) -> FloatExtResult<T> {
    validate(range, taper)?;
    Ok(normalize(value, range, taper, around_center))
}

fn validate<T: TaperFloat>(range: FloatRange<T>, taper: T) -> FloatExtResult<()> {
    let t = taper.widen();
    if !is_valid_taper(t) {
        return Err(FloatExtError::InvalidTaper(t));
    }
    FloatRange::try_new(range.lower(), range.upper())?;
    Ok(())
}

/// Stored taper configuration.
///
/// Carries the two curve parameters so a parameter mapping can be kept in a
/// settings file. The default is the straight line without folding.
///
/// # Example
///
/// ```
/// use float_ext::{FloatRange, TaperCurve};
///
/// let curve = TaperCurve::new(0.2, false)?;
/// let range = FloatRange::new(20.0f64, 20000.0);
///
/// let hz = curve.denormalize(0.3, range);
/// assert!((curve.normalize(hz, range) - 0.3).abs() < 1e-9);
/// # Ok::<(), float_ext::FloatExtError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaperCurve {
    /// Curve shape, valid in `(0, 1)`; `0.5` is linear.
    pub taper: f64,
    /// Fold the curve symmetrically around the range midpoint.
    pub around_center: bool,
}

impl TaperCurve {
    /// Straight line without folding.
    pub const LINEAR: Self = Self {
        taper: LINEAR_TAPER,
        around_center: false,
    };

    /// Creates a validated taper configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FloatExtError::InvalidTaper`] if `taper` is not within `(0, 1)`.
    pub fn new(taper: f64, around_center: bool) -> FloatExtResult<Self> {
        let curve = Self {
            taper,
            around_center,
        };
        curve.validate()?;
        Ok(curve)
    }

    /// Checks the taper, e.g. after deserializing.
    ///
    /// # Errors
    ///
    /// Returns [`FloatExtError::InvalidTaper`] if `taper` is not within `(0, 1)`.
    pub fn validate(&self) -> FloatExtResult<()> {
        if is_valid_taper(self.taper) {
            Ok(())
        } else {
            Err(FloatExtError::InvalidTaper(self.taper))
        }
    }

    /// Returns `true` for the straight-line, unfolded configuration.
    pub fn is_linear(&self) -> bool {
        !self.around_center && is_linear_taper(self.taper)
    }

    /// See [`denormalize`].
    pub fn denormalize<T: TaperFloat>(&self, value: T, range: FloatRange<T>) -> T {
        trace!(taper = self.taper, around_center = self.around_center, "denormalize");
        denormalize(value, range, T::narrow(self.taper), self.around_center)
    }

    /// See [`normalize`].
    pub fn normalize<T: TaperFloat>(&self, value: T, range: FloatRange<T>) -> T {
        trace!(taper = self.taper, around_center = self.around_center, "normalize");
        normalize(value, range, T::narrow(self.taper), self.around_center)
    }
}

impl Default for TaperCurve {
    fn default() -> Self {
        Self::LINEAR
    }
}

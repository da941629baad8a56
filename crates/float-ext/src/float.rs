//! Floating-point capability shared by every operation in the crate.

use core::fmt::{Debug, Display};
use core::num::ParseFloatError;
use core::str::FromStr;

use num_traits::Float;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Working floating-point type, implemented for `f32` and `f64`.
///
/// The nonlinear taper formulas always run in `f64`. [`widen`](Self::widen)
/// and [`narrow`](Self::narrow) move values across that boundary so that a
/// single-precision caller gets the accuracy of the double-precision math and
/// only pays one rounding step on the way out.
///
/// `Display` and `FromStr` are required because decimal rounding goes through
/// the shortest round-trip text of a value.
pub trait TaperFloat:
    Float
    + Debug
    + Display
    + FromStr<Err = ParseFloatError>
    + Default
    + Send
    + Sync
    + sealed::Sealed
    + 'static
{
    /// `0.5` in the working type.
    const HALF: Self;

    /// `2.0` in the working type.
    const TWO: Self;

    /// Lossless conversion to `f64`.
    fn widen(self) -> f64;

    /// Conversion from `f64`, rounding to nearest for narrower types.
    fn narrow(value: f64) -> Self;

    /// Largest representable value strictly less than `self`.
    ///
    /// NaN is returned unchanged and `-inf` stays `-inf`.
    fn next_down(self) -> Self;
}

impl TaperFloat for f32 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing back to single precision is the point of this conversion"
    )]
    fn narrow(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn next_down(self) -> Self {
        f32::next_down(self)
    }
}

impl TaperFloat for f64 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }

    #[inline]
    fn next_down(self) -> Self {
        f64::next_down(self)
    }
}

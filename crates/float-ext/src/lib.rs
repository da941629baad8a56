//! Floating-point range, taper and rounding utilities
//!
//! This crate maps parameter values between a normalized `[0, 1]` domain and
//! arbitrary closed ranges, the way a knob or fader drives a frequency, gain
//! or pan setting.
//!
//! # Overview
//!
//! - **Ranges**: [`FloatRange`] with size, midpoint and the two half-ranges
//!   that partition it around the midpoint
//! - **Linear mapping**: [`clamp`] and [`linear_map`]
//! - **Taper curves**: [`denormalize`] / [`normalize`], an exponential curve
//!   shaped by a taper in `(0, 1)`, optionally folded point-symmetrically
//!   around the range midpoint
//! - **Decimal rounding**: [`round`], [`truncate`] and [`trailing_digits`]
//!   computed on a decimal representation instead of scaled binary floats
//!
//! Everything is generic over `f32` and `f64` via [`TaperFloat`]. The
//! nonlinear math runs in `f64` regardless of the working type.
//!
//! # Failure policy
//!
//! The plain functions never panic and never return errors. An invalid taper
//! degrades to a fixed value and out-of-domain input propagates through the
//! formulas. Every such function has a `try_*` sibling (or a validating
//! constructor) returning [`FloatExtError`].
//!
//! # Example
//!
//! ```
//! use float_ext::{FloatRange, TaperCurve};
//!
//! // Pan knob: centered detent, fine control near the middle.
//! let pan = TaperCurve::new(0.2, true)?;
//! let range = FloatRange::new(-100.0f64, 100.0);
//!
//! assert!(pan.denormalize(0.5, range).abs() < 1e-12);
//! let knob = pan.normalize(25.0, range);
//! assert!((pan.denormalize(knob, range) - 25.0).abs() < 1e-7);
//! # Ok::<(), float_ext::FloatExtError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod ext;
pub mod float;
pub mod map;
pub mod prelude;
pub mod range;
pub mod round;
pub mod taper;

pub use error::{FloatExtError, FloatExtResult};
pub use ext::FloatExt;
pub use float::TaperFloat;
pub use map::{clamp, linear_map};
pub use range::FloatRange;
pub use round::{round, trailing_digits, truncate, try_round, try_truncate};
pub use taper::{
    LINEAR_TAPER, TaperCurve, denormalize, normalize, try_denormalize, try_normalize,
};

//! Error types for the strict entry points.
//!
//! The primary API never fails: invalid tapers degrade to a constant and
//! out-of-domain values propagate through the formulas. The `try_*` functions
//! and validating constructors report the same conditions through
//! [`FloatExtError`] instead.

/// Error type for validating range, taper and rounding operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FloatExtError {
    /// Taper lies outside the open interval `(0, 1)` or is NaN.
    #[error("Taper must be within (0, 1), got {0}")]
    InvalidTaper(f64),

    /// Range lower bound is greater than its upper bound.
    #[error("Range lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange {
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },

    /// One of the range bounds is NaN or infinite.
    #[error("Range bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBound {
        /// Lower bound as given.
        lower: f64,
        /// Upper bound as given.
        upper: f64,
    },

    /// Value handed to a decimal operation is NaN or infinite.
    #[error("Value {0} is not finite")]
    NonFiniteValue(f64),

    /// Value cannot be held by the decimal intermediate representation.
    #[error("Value {value} is outside the decimal range: {reason}")]
    DecimalOutOfRange {
        /// Offending value.
        value: f64,
        /// Reason reported by the decimal parser.
        reason: String,
    },
}

/// Result alias for fallible float-ext operations.
pub type FloatExtResult<T> = Result<T, FloatExtError>;

//! Decimal rounding and truncation.
//!
//! Scaling by `10^digits` in binary floating point drags representation error
//! into the result: `1.005 * 100.0` is `100.49999999999999`. Instead, values
//! are converted to a [`Decimal`] from their shortest round-trip text (the
//! digits a user actually sees), rounded there, and parsed back.
//!
//! [`Decimal`] holds at most 28 fractional digits, so `digits` above 28 act
//! like 28. Text beyond the 28th fractional digit is cut off before parsing
//! and only its sign is kept, which is enough to round and truncate the tiny
//! values below `1e-28` correctly: `truncate(-1e-30, 2)` is `-0.01`.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{FloatExtError, FloatExtResult};
use crate::float::TaperFloat;

/// Largest scale a [`Decimal`] can carry.
const MAX_SCALE: u32 = 28;

#[derive(Debug, Clone, Copy)]
enum Mode {
    HalfAwayFromZero,
    Floor,
}

impl Mode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Decimal form of `value` truncated toward zero at [`MAX_SCALE`] digits,
/// and whether nonzero digits were cut off.
fn to_decimal<T: TaperFloat>(value: T) -> FloatExtResult<(Decimal, bool)> {
    if !value.is_finite() {
        return Err(FloatExtError::NonFiniteValue(value.widen()));
    }
    let out_of_range = |reason: String| FloatExtError::DecimalOutOfRange {
        value: value.widen(),
        reason,
    };

    // Display never uses exponent notation for floats
    let text = value.to_string();
    let (text, cut) = match text.split_once('.') {
        Some((int, frac)) if frac.len() > MAX_SCALE as usize => {
            let (kept, tail) = frac
                .split_at_checked(MAX_SCALE as usize)
                .unwrap_or((frac, ""));
            (format!("{int}.{kept}"), tail.bytes().any(|d| d != b'0'))
        }
        _ => (text, false),
    };

    let decimal =
        Decimal::from_str_exact(&text).map_err(|err| out_of_range(err.to_string()))?;
    Ok((decimal, cut))
}

fn from_decimal<T: TaperFloat>(decimal: Decimal, value: T) -> FloatExtResult<T> {
    decimal
        .to_string()
        .parse::<T>()
        .map_err(|err| FloatExtError::DecimalOutOfRange {
            value: value.widen(),
            reason: err.to_string(),
        })
}

fn round_with<T: TaperFloat>(value: T, digits: u32, mode: Mode) -> FloatExtResult<T> {
    let (decimal, cut) = to_decimal(value)?;
    let scale = digits.min(MAX_SCALE);
    let mut rounded = decimal.round_dp_with_strategy(scale, mode.strategy());

    // A negative value with digits cut off lies strictly below `decimal`.
    // When `decimal` already sits on the grid, its floor is one step lower.
    // Rounding half away from zero is unaffected: the cut digits can only
    // push a value that was exactly on a midpoint further away from zero.
    if matches!(mode, Mode::Floor) && cut && value.is_sign_negative() && rounded == decimal {
        let step = Decimal::try_new(1, scale).map_err(|err| FloatExtError::DecimalOutOfRange {
            value: value.widen(),
            reason: err.to_string(),
        })?;
        rounded = rounded
            .checked_sub(step)
            .ok_or_else(|| FloatExtError::DecimalOutOfRange {
                value: value.widen(),
                reason: "floor step overflowed".to_string(),
            })?;
    }

    from_decimal(rounded, value)
}

fn or_unchanged<T: TaperFloat>(result: FloatExtResult<T>, value: T) -> T {
    match result {
        Ok(rounded) => rounded,
        Err(FloatExtError::NonFiniteValue(_)) => value,
        Err(err) => {
            debug!(value = %value, error = %err, "decimal conversion failed, value left unchanged");
            value
        }
    }
}

/// Rounds `value` to `digits` fractional digits, halves away from zero.
///
/// Non-finite values and magnitudes beyond the decimal range (about `7.9e28`,
/// where a float has no fractional digits left anyway) come back unchanged.
///
/// # Example
///
/// ```
/// use float_ext::round;
///
/// assert_eq!(round(1.2350, 2), 1.24);
/// assert_eq!(round(1.005, 2), 1.01);
/// assert_eq!(round(-2.5, 0), -3.0);
/// ```
pub fn round<T: TaperFloat>(value: T, digits: u32) -> T {
    or_unchanged(try_round(value, digits), value)
}

/// Truncates `value` to `digits` fractional digits, toward negative infinity.
///
/// Same pass-through rules as [`round`].
///
/// # Example
///
/// ```
/// use float_ext::truncate;
///
/// assert_eq!(truncate(1.2399, 2), 1.23);
/// assert_eq!(truncate(-1.231, 2), -1.24);
/// ```
pub fn truncate<T: TaperFloat>(value: T, digits: u32) -> T {
    or_unchanged(try_truncate(value, digits), value)
}

/// Fractional part left over by [`truncate`] to zero digits.
///
/// Always in `[0, 1)` for finite input, since truncation goes toward negative
/// infinity: `trailing_digits(-1.25)` is `0.75`. Tiny negative values whose
/// fractional part rounds up to `1` return the largest value below `1`.
pub fn trailing_digits<T: TaperFloat>(value: T) -> T {
    let fraction = value - truncate(value, 0);
    if fraction >= T::one() {
        T::one().next_down()
    } else {
        fraction
    }
}

/// [`round`] that reports values it cannot round.
///
/// # Errors
///
/// Returns [`FloatExtError::NonFiniteValue`] for NaN or infinity and
/// [`FloatExtError::DecimalOutOfRange`] when the decimal intermediate cannot
/// hold the value.
pub fn try_round<T: TaperFloat>(value: T, digits: u32) -> FloatExtResult<T> {
    round_with(value, digits, Mode::HalfAwayFromZero)
}

/// [`truncate`] that reports values it cannot truncate.
///
/// # Errors
///
/// Same conditions as [`try_round`].
pub fn try_truncate<T: TaperFloat>(value: T, digits: u32) -> FloatExtResult<T> {
    round_with(value, digits, Mode::Floor)
}

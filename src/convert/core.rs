//! Generic rounding core.
//!
//! Every named conversion in [`int`](super::int) and [`long`](super::long)
//! is an instantiation of [`convert`]. The steps are:
//!
//! 1. Optionally clamp the source into the target range ([`saturate`]).
//! 2. Round to an integral value in the source width ([`RoundingMode::round`]).
//! 3. Cast the integral value to the target integer.
//!
//! Rounding never leaves the target range once the value has been clamped:
//! both bounds are integral in every float width, so rounding a value that
//! lies between them cannot move it past either.

use super::mode::RoundingMode;
use super::saturate::saturate;
use super::types::{Float, IntValue, IntWidth, SignedInt};

/// Converts `value` to `I` using `mode`.
///
/// With `saturating` set, NaN converts to `0` and out-of-range values to
/// the nearest bound. Without it those inputs are undefined in the kernel
/// model; see the [module docs](super#non-saturating-conversions).
#[inline]
pub fn convert<I: SignedInt, F: Float>(value: F, mode: RoundingMode, saturating: bool) -> I {
    let value = if saturating {
        saturate::<I, F>(value)
    } else {
        value
    };

    mode.round(value).to_int::<I>()
}

/// Round to nearest, ties to even.
#[inline]
pub fn convert_round_nearest_even<I: SignedInt, F: Float>(value: F, saturating: bool) -> I {
    convert(value, RoundingMode::NearestEven, saturating)
}

/// Round toward positive infinity (ceiling).
#[inline]
pub fn convert_round_toward_positive<I: SignedInt, F: Float>(value: F, saturating: bool) -> I {
    convert(value, RoundingMode::TowardPositive, saturating)
}

/// Round toward negative infinity (floor).
#[inline]
pub fn convert_round_toward_negative<I: SignedInt, F: Float>(value: F, saturating: bool) -> I {
    convert(value, RoundingMode::TowardNegative, saturating)
}

/// Round toward zero (truncation).
#[inline]
pub fn convert_truncate<I: SignedInt, F: Float>(value: F, saturating: bool) -> I {
    convert(value, RoundingMode::TowardZero, saturating)
}

/// Converts to a target whose width is only known at runtime.
pub fn convert_to_width<F: Float>(
    value: F,
    width: IntWidth,
    mode: RoundingMode,
    saturating: bool,
) -> IntValue {
    match width {
        IntWidth::Int32 => IntValue::Int32(convert::<i32, F>(value, mode, saturating)),
        IntWidth::Int64 => IntValue::Int64(convert::<i64, F>(value, mode, saturating)),
    }
}

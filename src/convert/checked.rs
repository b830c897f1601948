//! Conversions that report undefined inputs.
//!
//! A non-saturating kernel conversion has no defined result for NaN or for
//! a value whose rounded form does not fit in the target. The functions
//! here return those cases as [`ConversionError`] so host code can detect
//! them instead of picking a value.

use log::trace;

use super::error::ConversionError;
use super::mode::RoundingMode;
use super::types::{Float, SignedInt};

/// Rounds `value` with `mode` and converts it to `I`, or reports why the
/// kernel result would be undefined.
///
/// The range test is applied to the rounded value against
/// `[I::MIN, 2^(bits-1))`. Both bounds are exact in `f32` and `f64`, so the
/// test is precise in either width.
pub fn try_convert<I: SignedInt, F: Float>(value: F, mode: RoundingMode) -> Result<I, ConversionError> {
    if value.is_nan() {
        trace!("rejecting NaN for {} {mode} conversion", I::WIDTH);
        return Err(ConversionError::NotANumber);
    }

    let rounded = mode.round(value);
    let lower = F::int_min::<I>();

    // -MIN is 2^(bits-1), one past MAX.
    if rounded < lower || rounded >= -lower {
        trace!("rejecting {value:?} for {} {mode} conversion", I::WIDTH);
        return Err(ConversionError::OutOfRange {
            value: value.to_f64(),
            width: I::WIDTH,
        });
    }

    Ok(rounded.to_int::<I>())
}

pub fn try_convert_int<F: Float>(value: F, mode: RoundingMode) -> Result<i32, ConversionError> {
    try_convert::<i32, F>(value, mode)
}

pub fn try_convert_long<F: Float>(value: F, mode: RoundingMode) -> Result<i64, ConversionError> {
    try_convert::<i64, F>(value, mode)
}

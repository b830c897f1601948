//! Conversions to `i32` (`int`).
//!
//! Each function is generic over the source float, giving one entry point
//! per name for both `f32` and `f64` sources. Non-saturating variants are
//! undefined for NaN and for values whose rounded result does not fit in
//! 32 bits.

use super::core::convert;
use super::mode::RoundingMode;
use super::types::Float;

/// Toward zero, not saturating. Same as [`convert_int_rtz`].
#[inline]
pub fn convert_int<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::default(), false)
}

/// Toward zero, saturating. Same as [`convert_int_sat_rtz`].
#[inline]
pub fn convert_int_sat<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::default(), true)
}

/// Nearest, ties to even.
#[inline]
pub fn convert_int_rte<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::NearestEven, false)
}

#[inline]
pub fn convert_int_rtp<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::TowardPositive, false)
}

#[inline]
pub fn convert_int_rtn<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::TowardNegative, false)
}

#[inline]
pub fn convert_int_rtz<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::TowardZero, false)
}

/// Nearest, ties to even. NaN gives `0`, out-of-range values the nearest
/// bound.
#[inline]
pub fn convert_int_sat_rte<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::NearestEven, true)
}

#[inline]
pub fn convert_int_sat_rtp<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::TowardPositive, true)
}

#[inline]
pub fn convert_int_sat_rtn<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::TowardNegative, true)
}

#[inline]
pub fn convert_int_sat_rtz<F: Float>(value: F) -> i32 {
    convert(value, RoundingMode::TowardZero, true)
}

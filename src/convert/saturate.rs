//! Saturation clamps.
//!
//! A clamp is evaluated at the width of the source float: an `f32` is
//! compared against the `f32` image of the target bounds, an `f64` against
//! the `f64` image. The result is a float of the same width that the
//! rounding core can convert without leaving the target range.

use super::types::{Float, IntWidth, SignedInt};

/// Clamps `value` into the range of `I`.
///
/// - NaN returns `0`.
/// - Values above `I::MAX` return `I::MAX` in float form.
/// - Values below `I::MIN` return `I::MIN` in float form.
/// - Anything else is returned unchanged.
///
/// "In float form" means rounded to the source width, so for an `f32`
/// source the upper bound of both targets is `2^(bits-1)`. Converting that
/// bound with `as` still yields `I::MAX`.
#[inline]
pub fn saturate<I: SignedInt, F: Float>(value: F) -> F {
    if value.is_nan() {
        return F::ZERO;
    }

    let max = F::int_max::<I>();
    let min = F::int_min::<I>();

    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Clamps into the `i32` range.
#[inline]
pub fn saturate_int<F: Float>(value: F) -> F {
    saturate::<i32, F>(value)
}

/// Clamps into the `i64` range.
#[inline]
pub fn saturate_long<F: Float>(value: F) -> F {
    saturate::<i64, F>(value)
}

/// Clamps into the range of a target chosen at runtime.
pub fn clamp_to_int_range<F: Float>(value: F, width: IntWidth) -> F {
    match width {
        IntWidth::Int32 => saturate_int(value),
        IntWidth::Int64 => saturate_long(value),
    }
}

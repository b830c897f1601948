//! Half-offset approximations of the kernel conversions.
//!
//! These are the short formulas often used to emulate kernel conversions on
//! the host:
//!
//! - `rtz`: truncate.
//! - `rtp`: add `0.5`, then truncate.
//! - `rtn`: subtract `0.5`, then truncate.
//! - `rte`: with `s` the sign of `v` and `o` the parity of `trunc(v)`,
//!   truncate `v - s * (0.5 - o)`.
//!
//! They agree with [`convert`](crate::convert::convert) in `rtz` mode and,
//! for `rte`, on half-way inputs. Elsewhere they differ: `rtp(2.1)` is `2`,
//! `rte(2.7)` is `2` and even integral inputs are not fixed points
//! (`rte(2.0)` is `1`, `rtn(2.0)` is `1`). Use them only when reproducing
//! results that were produced with these formulas.
//!
//! Parity is taken at the full target width and ignores the sign, so
//! `-3.5` goes to `-4` under `rte`.
//!
//! The saturating forms clamp with [`saturate`] first, exactly as the exact
//! conversions do.

use crate::convert::{Float, RoundingMode, SignedInt, saturate};

/// Converts `value` to `I` with the half-offset formula for `mode`.
pub fn convert<I: SignedInt, F: Float>(value: F, mode: RoundingMode, saturating: bool) -> I {
    let v = if saturating {
        saturate::<I, F>(value)
    } else {
        value
    };

    let shifted = match mode {
        RoundingMode::TowardZero => v,
        RoundingMode::TowardPositive => v + F::HALF,
        RoundingMode::TowardNegative => v - F::HALF,
        RoundingMode::NearestEven => {
            let odd = v.to_int::<I>().is_odd();
            // 0.5 - parity
            let offset = if odd { -F::HALF } else { F::HALF };

            if v > F::ZERO {
                v - offset
            } else if v < F::ZERO {
                v + offset
            } else {
                v
            }
        }
    };

    shifted.to_int::<I>()
}

pub fn convert_int<F: Float>(value: F, mode: RoundingMode, saturating: bool) -> i32 {
    convert::<i32, F>(value, mode, saturating)
}

pub fn convert_long<F: Float>(value: F, mode: RoundingMode, saturating: bool) -> i64 {
    convert::<i64, F>(value, mode, saturating)
}

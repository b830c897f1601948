//! Host-side float to integer conversions with kernel semantics
//!
//! This crate reproduces the scalar conversion rules that OpenCL-style
//! kernel languages define for turning floating-point values into signed
//! integers, so that host code can compute bit-for-bit the same results as
//! device code.
//!
//! The focus is on **exactness and explicit semantics**: every entry point
//! names its rounding mode and saturation policy, and every behaviour at
//! the edges of the target range is either defined or documented.
//!
//! # Module overview
//!
//! - `convert`
//!   The conversion engine. It provides the saturation clamps, the generic
//!   rounding core, and the named `convert_int_*` / `convert_long_*`
//!   matrix for `f32` and `f64` sources.
//!
//!   A checked variant (`convert::checked`) reports NaN and out-of-range
//!   inputs as errors instead of producing a value.
//!
//! - `half_offset`
//!   The widely circulated "add or subtract one half, then truncate"
//!   formulas for the same matrix. They only agree with the kernel rules
//!   on half-way values and are kept apart so that nobody picks them up by
//!   accident.
//!
//! # Coverage
//!
//! Sources: `f32`, `f64`. Targets: `i32` (`int`), `i64` (`long`).
//! Unsigned targets, vector widths and half precision are not provided.
//!
//! # Design goals
//!
//! - Pure functions, no allocation, no shared state
//! - One generic implementation instead of per-width copies
//! - Names that match the kernel built-ins they mirror

pub mod convert;
pub mod half_offset;

pub use convert::{
    ConversionError, Float, IntValue, IntWidth, ParseRoundingModeError, RoundingMode, SignedInt,
    clamp_to_int_range, convert, convert_round_nearest_even, convert_round_toward_negative,
    convert_round_toward_positive, convert_to_width, convert_truncate,
};

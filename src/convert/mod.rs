//! Float to signed integer conversion engine.
//!
//! The engine is split into small layers:
//!
//! - [`types`]
//!   The source (`f32`, `f64`) and target (`i32`, `i64`) type traits.
//!   Both are sealed; the conversion matrix is closed.
//!
//! - [`mode`]
//!   The four kernel rounding modes.
//!
//! - [`saturate`]
//!   Clamping a float into the range of a target integer, evaluated at the
//!   width of the source float. NaN clamps to zero.
//!
//! - [`core`](self::core)
//!   The generic rounding core shared by every named conversion.
//!
//! - [`int`] and [`long`]
//!   The named `convert_int_*` and `convert_long_*` functions. Each is
//!   generic over the source float, so every name exists for both `f32`
//!   and `f64`.
//!
//! - [`checked`]
//!   Conversions that report NaN and out-of-range inputs as errors.
//!
//! ## Non-saturating conversions
//!
//! Kernel languages leave NaN and out-of-range inputs undefined when the
//! conversion is not saturating. This crate does not pick a value for
//! them: the final cast is Rust's `as`, which happens to saturate and map
//! NaN to zero, but callers must not depend on that. Use the `_sat`
//! variants for a defined result or [`checked::try_convert`] to detect the
//! case.

pub mod checked;
pub mod core;
pub mod int;
pub mod long;
pub mod mode;
pub mod saturate;
pub mod types;

mod error;

pub use self::core::{
    convert, convert_round_nearest_even, convert_round_toward_negative,
    convert_round_toward_positive, convert_to_width, convert_truncate,
};
pub use error::{ConversionError, ParseRoundingModeError};
pub use mode::RoundingMode;
pub use saturate::{clamp_to_int_range, saturate, saturate_int, saturate_long};
pub use types::{Float, IntValue, IntWidth, SignedInt};

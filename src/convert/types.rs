//! Source and target types of the conversion matrix.
//!
//! [`Float`] is implemented for `f32` and `f64`, [`SignedInt`] for `i32`
//! and `i64`. Both traits are sealed.

use std::fmt::{Debug, Display, Formatter, Result};
use std::ops::{Add, Neg, Sub};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Bit width of a signed integer target, for callers that select the target
/// at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 32-bit signed integer (`int`).
    Int32,
    /// 64-bit signed integer (`long`).
    Int64,
}

impl IntWidth {
    /// Number of bits in the target type.
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::Int32 => 32,
            IntWidth::Int64 => 64,
        }
    }
}

impl Display for IntWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Result of a conversion whose target width was chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntValue {
    Int32(i32),
    Int64(i64),
}

impl IntValue {
    /// Width of the stored value.
    pub const fn width(self) -> IntWidth {
        match self {
            IntValue::Int32(_) => IntWidth::Int32,
            IntValue::Int64(_) => IntWidth::Int64,
        }
    }
}

/// Sign-extends a 32-bit result.
impl From<IntValue> for i64 {
    fn from(value: IntValue) -> Self {
        match value {
            IntValue::Int32(v) => v as i64,
            IntValue::Int64(v) => v,
        }
    }
}

impl From<i32> for IntValue {
    fn from(value: i32) -> Self {
        IntValue::Int32(value)
    }
}

impl From<i64> for IntValue {
    fn from(value: i64) -> Self {
        IntValue::Int64(value)
    }
}

/// A signed integer conversion target.
///
/// The range bounds are given in both float widths, rounded the way `as`
/// rounds them. `MIN` is a power of two and exact in either width; `MAX`
/// rounds up to `-MIN` in `f32` for both targets and in `f64` for `i64`.
pub trait SignedInt: Copy + Debug + Eq + sealed::Sealed {
    const WIDTH: IntWidth;
    const MIN: Self;
    const MAX: Self;

    const MIN_F32: f32;
    const MAX_F32: f32;
    const MIN_F64: f64;
    const MAX_F64: f64;

    /// Rust `as` cast from `f32`.
    fn from_f32(value: f32) -> Self;

    /// Rust `as` cast from `f64`.
    fn from_f64(value: f64) -> Self;

    /// `true` when the magnitude of the value is odd.
    fn is_odd(self) -> bool;
}

macro_rules! impl_signed_int {
    ($t:ty, $width:expr) => {
        impl SignedInt for $t {
            const WIDTH: IntWidth = $width;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            const MIN_F32: f32 = <$t>::MIN as f32;
            const MAX_F32: f32 = <$t>::MAX as f32;
            const MIN_F64: f64 = <$t>::MIN as f64;
            const MAX_F64: f64 = <$t>::MAX as f64;

            #[inline]
            fn from_f32(value: f32) -> Self {
                value as $t
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn is_odd(self) -> bool {
                // Two's complement: the low bit is the parity of the magnitude.
                self & 1 != 0
            }
        }
    };
}

impl_signed_int!(i32, IntWidth::Int32);
impl_signed_int!(i64, IntWidth::Int64);

/// A floating-point conversion source.
///
/// All arithmetic needed by the rounding core is evaluated at the width of
/// the implementing type.
pub trait Float:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + sealed::Sealed
{
    const ZERO: Self;
    const HALF: Self;

    fn is_nan(self) -> bool;
    fn trunc(self) -> Self;
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn round_ties_even(self) -> Self;

    /// Lossless widening, used for error reporting.
    fn to_f64(self) -> f64;

    /// `I::MIN` in this float width.
    fn int_min<I: SignedInt>() -> Self;

    /// `I::MAX` in this float width (rounded as by `as`).
    fn int_max<I: SignedInt>() -> Self;

    /// Rust `as` cast to the target integer.
    fn to_int<I: SignedInt>(self) -> I;
}

macro_rules! impl_float {
    ($t:ty, $min:ident, $max:ident, $from:ident) => {
        impl Float for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                <$t>::trunc(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn round_ties_even(self) -> Self {
                <$t>::round_ties_even(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn int_min<I: SignedInt>() -> Self {
                I::$min
            }

            #[inline]
            fn int_max<I: SignedInt>() -> Self {
                I::$max
            }

            #[inline]
            fn to_int<I: SignedInt>(self) -> I {
                I::$from(self)
            }
        }
    };
}

impl_float!(f32, MIN_F32, MAX_F32, from_f32);
impl_float!(f64, MIN_F64, MAX_F64, from_f64);

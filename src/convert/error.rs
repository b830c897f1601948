use thiserror::Error;

use super::types::IntWidth;

/// Inputs that a non-saturating kernel conversion leaves undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConversionError {
    /// The source value was NaN.
    #[error("NaN has no integer value")]
    NotANumber,
    /// The rounded value does not fit in the target type.
    #[error("{value} is outside the range of a {width} signed integer")]
    OutOfRange {
        /// Source value, widened to `f64` without loss.
        value: f64,
        width: IntWidth,
    },
}

/// Unknown rounding mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rounding mode `{0}` (expected rte, rtp, rtn or rtz)")]
pub struct ParseRoundingModeError(pub String);

//! Kernel rounding modes.

use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use super::error::ParseRoundingModeError;
use super::types::Float;

/// Rounding mode of a float to integer conversion.
///
/// The kernel built-ins select the mode with a name suffix; [`suffix`]
/// and the [`FromStr`] impl use the same spelling.
///
/// [`suffix`]: RoundingMode::suffix
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// `_rte`: nearest integer, ties to the even one.
    NearestEven,
    /// `_rtp`: toward positive infinity.
    TowardPositive,
    /// `_rtn`: toward negative infinity.
    TowardNegative,
    /// `_rtz`: toward zero. Unsuffixed float to integer conversions use
    /// this mode.
    #[default]
    TowardZero,
}

impl RoundingMode {
    /// All modes, in suffix order `rte`, `rtp`, `rtn`, `rtz`.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::NearestEven,
        RoundingMode::TowardPositive,
        RoundingMode::TowardNegative,
        RoundingMode::TowardZero,
    ];

    /// Built-in name suffix without the leading underscore.
    pub const fn suffix(self) -> &'static str {
        match self {
            RoundingMode::NearestEven => "rte",
            RoundingMode::TowardPositive => "rtp",
            RoundingMode::TowardNegative => "rtn",
            RoundingMode::TowardZero => "rtz",
        }
    }

    /// Rounds `value` to an integral float of the same width.
    ///
    /// NaN and infinities are returned unchanged.
    #[inline]
    pub fn round<F: Float>(self, value: F) -> F {
        match self {
            RoundingMode::NearestEven => value.round_ties_even(),
            RoundingMode::TowardPositive => value.ceil(),
            RoundingMode::TowardNegative => value.floor(),
            RoundingMode::TowardZero => value.trunc(),
        }
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.suffix())
    }
}

/// Parses a mode suffix, with or without the leading underscore.
impl FromStr for RoundingMode {
    type Err = ParseRoundingModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.strip_prefix('_').unwrap_or(s);

        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.suffix().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseRoundingModeError(s.to_owned()))
    }
}

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("precision must be a positive number of decimal digits")]
    Zero,
    #[error("precision ({digits}) exceeds the supported maximum of {max}", max = Precision::MAX_DIGITS)]
    TooLarge { digits: u32 },
}

/// Validated fixed-point resolution: the number of decimal digits carried
/// through the pipeline.
///
/// Invariant: `1 <= digits <= 18`, so `value * 10^digits` stays within the
/// range an `i64` nucleus can hold for realistic flux magnitudes. You cannot
/// construct an invalid `Precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Precision(u32);

impl Precision {
    pub const DEFAULT_DIGITS: u32 = 8;
    pub const MAX_DIGITS: u32 = 18;

    pub fn new(digits: u32) -> Result<Self, PrecisionError> {
        if digits == 0 {
            return Err(PrecisionError::Zero);
        }
        if digits > Self::MAX_DIGITS {
            return Err(PrecisionError::TooLarge { digits });
        }
        Ok(Self(digits))
    }

    #[must_use]
    pub const fn digits(self) -> u32 {
        self.0
    }

    /// The fixed-point scale factor, `10^digits`.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        10f64.powi(self.0 as i32)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(Self::DEFAULT_DIGITS)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Integer base-unit amounts with fixed-point encoding.

use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::fmt;

use crate::currency::ConversionError;

/// An amount in a chain's smallest indivisible unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_base(value: i64) -> Self {
        Self(value)
    }

    pub fn to_base(self) -> i64 {
        self.0
    }

    /// Render as a decimal string with `exponent` fractional places.
    ///
    /// Trailing fractional zeros are dropped but at least one digit is kept,
    /// so one whole bitcoin renders as `1.0`.
    pub fn encode(self, exponent: u32) -> Result<String, ConversionError> {
        if exponent == 0 {
            return Ok(self.0.to_string());
        }

        let value = Decimal::try_new(self.0, exponent)
            .map_err(|_| ConversionError::Overflow(self.0.to_string()))?
            .normalize();

        Ok(if value.scale() == 0 {
            format!("{}.0", value)
        } else {
            value.to_string()
        })
    }

    /// Render as a floating value scaled by `exponent` places.
    pub fn to_f64(self, exponent: u32) -> f64 {
        self.0 as f64 / 10f64.powi(exponent as i32)
    }

    /// Parse a decimal string scaled by `exponent` places into base units.
    pub fn decode(text: &str, exponent: u32) -> Result<Self, ConversionError> {
        let parsed = Decimal::from_str_exact(text.trim())
            .map_err(|e| ConversionError::InvalidAmount {
                value: text.to_string(),
                reason: e.to_string(),
            })?
            .normalize();

        if parsed.scale() > exponent {
            return Err(ConversionError::InvalidAmount {
                value: text.to_string(),
                reason: format!("more than {} decimal places", exponent),
            });
        }

        let overflow = || ConversionError::Overflow(text.to_string());
        let scale = 10u64.checked_pow(exponent).ok_or_else(overflow)?;
        parsed
            .checked_mul(Decimal::from(scale))
            .and_then(|base| base.to_i64())
            .map(Self)
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

//! Chain-aware currency conversion.
//!
//! # Responsibilities
//! - Resolve unit names for a configured chain
//! - Convert the held amount to any unit representation
//! - Load an amount from any unit representation

use std::fmt;

use crate::chain::Chain;
use crate::currency::amount::Amount;
use crate::currency::units::{units_for, CurrencyUnitSet, UnitType};
use crate::currency::{ConversionError, CurrencyError};
use crate::error::ValidationError;

/// Requested output shape for [`CurrencyConverter::to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFormat {
    /// Exact decimal string.
    String,
    /// Floating value, may lose precision for large amounts.
    Number,
}

/// A converted value.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitValue {
    String(String),
    Number(f64),
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitValue::String(s) => f.write_str(s),
            UnitValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Holds an amount for one chain and converts it between units.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyConverter {
    chain: Chain,
    units: &'static CurrencyUnitSet,
    amount: Amount,
}

impl CurrencyConverter {
    /// Create a converter for a chain name.
    pub fn new(chain: &str) -> Result<Self, ValidationError> {
        if chain.is_empty() {
            return Err(ValidationError::new(
                "must pass a chain to create a currency converter",
            ));
        }
        Ok(Self::for_chain(chain.parse()?))
    }

    pub fn for_chain(chain: Chain) -> Self {
        Self {
            chain,
            units: units_for(chain),
            amount: Amount::ZERO,
        }
    }

    /// Build a converter for `chain` and load `value` expressed in `unit`.
    pub fn from_chain_unit(chain: &str, unit: &str, value: &str) -> Result<Self, CurrencyError> {
        let mut converter = Self::new(chain)?;
        converter.from_unit(unit, value)?;
        Ok(converter)
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = amount;
        self
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn units(&self) -> &'static CurrencyUnitSet {
        self.units
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Chain-specific name for a unit type, e.g. `base` → `satoshi`.
    pub fn unit_name(&self, unit_type: &str) -> Result<&'static str, ValidationError> {
        let unit = UnitType::parse_name(unit_type)?;
        Ok(self.units.name(unit))
    }

    /// Convert the held amount to `unit`.
    ///
    /// Milli is encoded straight from the chain's precision (five places for
    /// bitcoin) rather than derived from the coin value.
    pub fn to(&self, unit: &str, format: UnitFormat) -> Result<UnitValue, ConversionError> {
        let unit = UnitType::parse_conversion(unit)?;
        let exponent = self.units.exponent(unit);

        Ok(match format {
            UnitFormat::String => UnitValue::String(self.amount.encode(exponent)?),
            UnitFormat::Number => UnitValue::Number(self.amount.to_f64(exponent)),
        })
    }

    pub fn to_string_in(&self, unit: &str) -> Result<String, ConversionError> {
        let unit = UnitType::parse_conversion(unit)?;
        self.amount.encode(self.units.exponent(unit))
    }

    /// Load the held amount from `value` expressed in `unit`.
    pub fn from_unit(&mut self, unit: &str, value: &str) -> Result<&mut Self, ConversionError> {
        let unit = UnitType::parse_conversion(unit)?;
        self.amount = Amount::decode(value, self.units.exponent(unit))?;
        Ok(self)
    }
}

//! Static currency unit table.

use std::fmt;

use crate::chain::Chain;
use crate::currency::ConversionError;
use crate::error::ValidationError;

/// Unit names and precision for one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyUnitSet {
    pub currency: &'static str,
    pub unit: &'static str,
    pub milli: &'static str,
    pub micro: &'static str,
    pub base: &'static str,
    /// Decimal places between one whole coin and the base unit.
    pub decimals: u32,
}

const BITCOIN_UNITS: CurrencyUnitSet = CurrencyUnitSet {
    currency: "bitcoin",
    unit: "btc",
    milli: "mbtc",
    micro: "bit",
    base: "satoshi",
    decimals: 8,
};

// bitcoincash shares bitcoin's unit names.
const BITCOINCASH_UNITS: CurrencyUnitSet = BITCOIN_UNITS;

const HANDSHAKE_UNITS: CurrencyUnitSet = CurrencyUnitSet {
    currency: "handshake",
    unit: "hns",
    milli: "mhns",
    micro: "uhns",
    base: "dollarydoo",
    decimals: 6,
};

/// Look up the unit set for a chain.
pub fn units_for(chain: Chain) -> &'static CurrencyUnitSet {
    match chain {
        Chain::Bitcoin => &BITCOIN_UNITS,
        Chain::BitcoinCash => &BITCOINCASH_UNITS,
        Chain::Handshake => &HANDSHAKE_UNITS,
    }
}

impl CurrencyUnitSet {
    /// Chain-specific name for a unit type.
    pub fn name(&self, unit: UnitType) -> &'static str {
        match unit {
            UnitType::Currency => self.currency,
            UnitType::Unit => self.unit,
            UnitType::Milli => self.milli,
            UnitType::Micro => self.micro,
            UnitType::Base => self.base,
        }
    }

    /// Decimal places between the base unit and `unit`.
    pub fn exponent(&self, unit: UnitType) -> u32 {
        match unit {
            UnitType::Base => 0,
            UnitType::Micro => self.decimals.saturating_sub(6),
            UnitType::Milli => self.decimals.saturating_sub(3),
            UnitType::Currency | UnitType::Unit => self.decimals,
        }
    }
}

/// The five unit kinds every chain names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Currency,
    Unit,
    Milli,
    Micro,
    Base,
}

impl UnitType {
    pub const ALL: [UnitType; 5] = [
        UnitType::Currency,
        UnitType::Unit,
        UnitType::Milli,
        UnitType::Micro,
        UnitType::Base,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::Currency => "currency",
            UnitType::Unit => "unit",
            UnitType::Milli => "milli",
            UnitType::Micro => "micro",
            UnitType::Base => "base",
        }
    }

    /// Strict lookup used for unit-name queries.
    pub fn parse_name(s: &str) -> Result<Self, ValidationError> {
        UnitType::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ValidationError::new(format!("{} not a supported unit type", s)))
    }

    /// Lookup used by conversions; also accepts `bits` for micro.
    pub fn parse_conversion(s: &str) -> Result<Self, ConversionError> {
        if s == "bits" {
            return Ok(UnitType::Micro);
        }
        UnitType::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

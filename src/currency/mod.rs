//! Currency units and amount conversion.
//!
//! # Data Flow
//! ```text
//! Chain
//!     → units.rs (static unit names + decimal precision)
//!     → amount.rs (integer base-unit amount, fixed-point encode/decode)
//!     → converter.rs (unit-aware conversion for one chain)
//! ```
//!
//! # Design Decisions
//! - Amounts are held as signed integers in base units; floats only on output
//! - Milli conversion is computed from the chain's precision directly
//! - Unit-name lookups fail with `ValidationError`, conversions with
//!   `ConversionError`

pub mod amount;
pub mod converter;
pub mod units;

use thiserror::Error;

use crate::error::ValidationError;

pub use amount::Amount;
pub use converter::{CurrencyConverter, UnitFormat, UnitValue};
pub use units::{units_for, CurrencyUnitSet, UnitType};

/// Errors raised while converting between unit representations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Unit type is not one this converter understands.
    #[error("Unknown unit \"{0}\".")]
    UnknownUnit(String),

    /// Value could not be read as a decimal amount.
    #[error("Invalid amount \"{value}\": {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Value does not fit in a signed 64-bit base-unit amount.
    #[error("Amount \"{0}\" is out of range")]
    Overflow(String),
}

/// Error for operations that both configure a chain and convert a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

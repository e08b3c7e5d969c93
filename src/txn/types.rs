//! Wallet transaction records, formatting constants and errors.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::ValidationError;

/// A transaction record as returned by a wallet history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Transaction hash, the cache key.
    pub hash: String,

    /// Raw serialized transaction, hex encoded.
    pub tx: String,

    /// Block height, -1 while unconfirmed.
    #[serde(default = "default_height")]
    pub height: i64,

    #[serde(default)]
    pub confirmations: u64,

    /// Time first seen by the wallet (unix seconds).
    #[serde(default)]
    pub mtime: i64,

    #[serde(default)]
    pub fee: Option<i64>,

    #[serde(default)]
    pub inputs: Vec<RecordInput>,

    #[serde(default)]
    pub outputs: Vec<RecordOutput>,
}

fn default_height() -> i64 {
    -1
}

/// Wallet view of a spent coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    /// Present when the coin belongs to the wallet.
    #[serde(default)]
    pub path: Option<Value>,
}

/// Wallet view of a created output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordOutput {
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub address: Option<String>,
    /// Present when the output pays the wallet.
    #[serde(default)]
    pub path: Option<Value>,
}

/// Copy strings used in transaction views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyStrings {
    pub send: String,
    pub receive: String,
    pub coinbase_receive: String,
    pub multiple_output: String,
    pub unknown_address: String,
}

impl Default for CopyStrings {
    fn default() -> Self {
        Self {
            send: "Sent".to_string(),
            receive: "Received".to_string(),
            coinbase_receive: "Coinbase".to_string(),
            multiple_output: "Multiple".to_string(),
            unknown_address: "Unknown".to_string(),
        }
    }
}

/// Formatting constants for parsed transaction views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxnConstants {
    /// chrono strftime pattern for the view's `date` field.
    pub date_format: String,
    pub copy: CopyStrings,
}

impl Default for TxnConstants {
    fn default() -> Self {
        Self {
            date_format: "%m/%d/%y %I:%M %P".to_string(),
            copy: CopyStrings::default(),
        }
    }
}

impl TxnConstants {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.date_format.is_empty() {
            return Err(ValidationError::new("date format must not be empty"));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ValidationError::new(format!(
                "invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// Errors raised while parsing transactions.
#[derive(Debug, Error)]
pub enum TxnError {
    #[error("Transaction {hash} is not valid hex: {source}")]
    Hex {
        hash: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Failed to decode transaction {hash}: {source}")]
    Decode {
        hash: String,
        #[source]
        source: bitcoin::consensus::encode::Error,
    },

    #[error("Failed to format transaction {hash}: {reason}")]
    Format { hash: String, reason: String },

    /// Raised by an injected custom parser.
    #[error("Custom parser failed: {0}")]
    Custom(String),
}

//! Transaction view formatting.
//!
//! # Responsibilities
//! - Decode raw transaction hex
//! - Classify direction (sent, received, coinbase) from the wallet record
//! - Summarize amount, counterparty address and date with configured copy

use bitcoin::Transaction;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::fmt::Write;

use crate::txn::types::{CopyStrings, RawTransaction, TxnError};

/// Inputs to a formatting call besides the raw hex.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    pub date_format: &'a str,
    pub copy: &'a CopyStrings,
    /// The wallet record the hex came from.
    pub record: &'a RawTransaction,
}

/// Turns one raw transaction into a JSON view.
pub trait TransactionFormatter: Send + Sync {
    fn format(&self, raw_hex: &str, context: &FormatContext<'_>) -> Result<Value, TxnError>;
}

/// Formatter for bitcoin-family transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinTxFormatter;

impl TransactionFormatter for BitcoinTxFormatter {
    fn format(&self, raw_hex: &str, context: &FormatContext<'_>) -> Result<Value, TxnError> {
        let record = context.record;
        let copy = context.copy;

        let bytes = hex::decode(raw_hex.trim()).map_err(|source| TxnError::Hex {
            hash: record.hash.clone(),
            source,
        })?;
        let tx: Transaction =
            bitcoin::consensus::deserialize(&bytes).map_err(|source| TxnError::Decode {
                hash: record.hash.clone(),
                source,
            })?;

        let out_of_range = || TxnError::Format {
            hash: record.hash.clone(),
            reason: "output total out of range".to_string(),
        };
        let values: Vec<i64> = tx
            .output
            .iter()
            .map(|output| i64::try_from(output.value.to_sat()))
            .collect::<Result<_, _>>()
            .map_err(|_| out_of_range())?;

        let coinbase = tx.is_coinbase();
        let spends_own = record.inputs.iter().any(|input| input.path.is_some());
        let is_own = |i: usize| record.outputs.get(i).is_some_and(|o| o.path.is_some());

        let all: Vec<usize> = (0..values.len()).collect();
        let own: Vec<usize> = all.iter().copied().filter(|&i| is_own(i)).collect();

        let (kind, counted) = if coinbase {
            (&copy.coinbase_receive, if own.is_empty() { all } else { own })
        } else if spends_own {
            let foreign = all.iter().copied().filter(|&i| !is_own(i)).collect();
            (&copy.send, foreign)
        } else {
            (&copy.receive, if own.is_empty() { all } else { own })
        };

        let amount = counted
            .iter()
            .try_fold(0i64, |total, &i| total.checked_add(values[i]))
            .ok_or_else(out_of_range)?;

        let mut addresses: Vec<&str> = Vec::new();
        for &i in &counted {
            if let Some(address) = record.outputs.get(i).and_then(|o| o.address.as_deref()) {
                if !addresses.contains(&address) {
                    addresses.push(address);
                }
            }
        }
        let address = match addresses.as_slice() {
            [] => copy.unknown_address.as_str(),
            [single] => *single,
            _ => copy.multiple_output.as_str(),
        };

        let date = if record.mtime > 0 {
            Value::String(format_date(record.mtime, context.date_format, &record.hash)?)
        } else {
            Value::Null
        };

        Ok(json!({
            "hash": record.hash,
            "type": kind,
            "amount": amount,
            "fee": record.fee,
            "address": address,
            "date": date,
            "confirmations": record.confirmations,
            "height": record.height,
            "pending": record.height < 0,
            "coinbase": coinbase,
            "inputs": tx.input.len(),
            "outputs": tx.output.len(),
        }))
    }
}

fn format_date(secs: i64, pattern: &str, hash: &str) -> Result<String, TxnError> {
    let time = DateTime::<Utc>::from_timestamp(secs, 0).ok_or_else(|| TxnError::Format {
        hash: hash.to_string(),
        reason: format!("timestamp {} out of range", secs),
    })?;

    let mut out = String::new();
    write!(out, "{}", time.format(pattern)).map_err(|_| TxnError::Format {
        hash: hash.to_string(),
        reason: format!("invalid date format '{}'", pattern),
    })?;
    Ok(out)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::txn::types::TxnConstants;
    use serde_json::json;

    fn format(record: &RawTransaction, constants: &TxnConstants) -> Result<Value, TxnError> {
        let context = FormatContext {
            date_format: &constants.date_format,
            copy: &constants.copy,
            record,
        };
        BitcoinTxFormatter.format(&record.tx, &context)
    }

    #[test]
    fn test_receive() {
        let constants = TxnConstants::default();
        let view = format(&record("aa", PAYMENT_HEX), &constants).unwrap();

        assert_eq!(view["type"], "Received");
        assert_eq!(view["amount"], 30_000);
        assert_eq!(view["address"], "addr-ours");
        assert_eq!(view["date"], "01/03/09 06:15 pm");
        assert_eq!(view["outputs"], 2);
        assert_eq!(view["pending"], false);
    }

    #[test]
    fn test_send() {
        let constants = TxnConstants::default();
        let mut raw = record("bb", PAYMENT_HEX);
        raw.inputs[0].path = Some(json!({ "account": 0 }));

        let view = format(&raw, &constants).unwrap();
        assert_eq!(view["type"], "Sent");
        assert_eq!(view["amount"], 15_000);
        assert_eq!(view["address"], "addr-theirs");
    }

    #[test]
    fn test_coinbase_with_custom_copy() {
        let mut constants = TxnConstants::default();
        constants.copy.coinbase_receive = "Mined".to_string();
        let mut raw = record("cc", COINBASE_HEX);
        raw.outputs.clear();

        let view = format(&raw, &constants).unwrap();
        assert_eq!(view["type"], "Mined");
        assert_eq!(view["coinbase"], true);
        assert_eq!(view["amount"], 5_000_000_000i64);
        assert_eq!(view["address"], "Unknown");
    }

    #[test]
    fn test_multiple_addresses() {
        let constants = TxnConstants::default();
        let mut raw = record("dd", PAYMENT_HEX);
        for output in &mut raw.outputs {
            output.path = None;
        }

        let view = format(&raw, &constants).unwrap();
        assert_eq!(view["amount"], 45_000);
        assert_eq!(view["address"], "Multiple");
    }

    #[test]
    fn test_output_total_out_of_range() {
        let constants = TxnConstants::default();
        for tx in [MAX_OUTPUTS_HEX, OVERSIZED_OUTPUTS_HEX] {
            let mut raw = record("ab", tx);
            for output in &mut raw.outputs {
                output.path = None;
            }

            let err = format(&raw, &constants).unwrap_err();
            assert!(matches!(
                err,
                TxnError::Format { ref reason, .. } if reason == "output total out of range"
            ));
        }
    }

    #[test]
    fn test_bad_hex() {
        let constants = TxnConstants::default();
        let err = format(&record("ee", "zz"), &constants).unwrap_err();
        assert!(matches!(err, TxnError::Hex { .. }));

        let err = format(&record("ff", "0100"), &constants).unwrap_err();
        assert!(matches!(err, TxnError::Decode { .. }));
    }
}

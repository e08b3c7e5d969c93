//! Transaction parsing with a hash-keyed cache.
//!
//! # Data Flow
//! ```text
//! wallet history records (RawTransaction)
//!     → cache.rs (hit: shared view / miss or bust: format)
//!     → format.rs (raw hex → JSON view using copy strings + date format)
//! ```
//!
//! # Design Decisions
//! - Parser mode is chosen once: memoized default or caller-supplied batch parser
//! - Entries are keyed by hash only; `refresh` is the only full clear

pub mod cache;
pub mod format;
pub mod types;

pub use cache::{CustomParser, ParsedView, ParserMode, TransactionParseCache, TxnCacheOptions};
pub use format::{BitcoinTxFormatter, FormatContext, TransactionFormatter};
pub use types::{CopyStrings, RawTransaction, RecordInput, RecordOutput, TxnConstants, TxnError};

//! Parsed transaction cache.

use dashmap::DashMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::observability::metrics;
use crate::txn::format::{BitcoinTxFormatter, FormatContext, TransactionFormatter};
use crate::txn::types::{RawTransaction, TxnConstants, TxnError};

/// A parsed transaction view, shared between the cache and callers.
pub type ParsedView = Arc<Value>;

/// Batch parser that replaces the cache entirely.
pub type CustomParser = Arc<
    dyn Fn(&[RawTransaction], Option<&str>, bool) -> Result<Vec<ParsedView>, TxnError>
        + Send
        + Sync,
>;

/// How `parse` produces views.
#[derive(Clone, Default)]
pub enum ParserMode {
    /// Format each transaction and memoize by hash.
    #[default]
    Default,
    /// Hand the whole batch to a caller-supplied parser, bypassing the cache.
    Custom(CustomParser),
}

impl ParserMode {
    pub fn custom<F>(parser: F) -> Self
    where
        F: Fn(&[RawTransaction], Option<&str>, bool) -> Result<Vec<ParsedView>, TxnError>
            + Send
            + Sync
            + 'static,
    {
        ParserMode::Custom(Arc::new(parser))
    }
}

impl fmt::Debug for ParserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserMode::Default => f.write_str("Default"),
            ParserMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for [`TransactionParseCache::new`].
#[derive(Clone, Default)]
pub struct TxnCacheOptions {
    pub mode: ParserMode,
    /// Defaults to [`TxnConstants::default`].
    pub constants: Option<TxnConstants>,
    /// Defaults to [`BitcoinTxFormatter`].
    pub formatter: Option<Arc<dyn TransactionFormatter>>,
}

#[derive(Clone)]
struct CacheEntry {
    view: ParsedView,
    /// Wallet context the view was produced under.
    wallet: Option<String>,
}

/// Memoizes parsed transaction views by hash.
///
/// Clones share the same entries.
#[derive(Clone)]
pub struct TransactionParseCache {
    parsed: Arc<DashMap<String, CacheEntry>>,
    mode: ParserMode,
    constants: TxnConstants,
    formatter: Arc<dyn TransactionFormatter>,
}

impl TransactionParseCache {
    /// Create a cache, validating the formatting constants.
    pub fn new(options: TxnCacheOptions) -> Result<Self, ValidationError> {
        let constants = options.constants.unwrap_or_default();
        constants.validate()?;

        Ok(Self {
            parsed: Arc::new(DashMap::new()),
            mode: options.mode,
            constants,
            formatter: options
                .formatter
                .unwrap_or_else(|| Arc::new(BitcoinTxFormatter)),
        })
    }

    pub fn mode(&self) -> &ParserMode {
        &self.mode
    }

    pub fn constants(&self) -> &TxnConstants {
        &self.constants
    }

    /// Parse a batch of wallet transactions, in input order.
    ///
    /// Cached views are returned as-is unless `bust` is set. Entries are
    /// keyed by hash alone; serving one across wallet contexts is logged.
    pub fn parse(
        &self,
        transactions: &[RawTransaction],
        wallet: Option<&str>,
        bust: bool,
    ) -> Result<Vec<ParsedView>, TxnError> {
        if let ParserMode::Custom(parser) = &self.mode {
            return parser(transactions, wallet, bust);
        }

        let mut views = Vec::with_capacity(transactions.len());
        for raw in transactions {
            if !bust {
                let cached = self
                    .parsed
                    .get(&raw.hash)
                    .map(|entry| (entry.view.clone(), entry.wallet.clone()));

                if let Some((view, produced_for)) = cached {
                    if produced_for.as_deref() != wallet {
                        tracing::warn!(
                            hash = %raw.hash,
                            cached_wallet = ?produced_for,
                            wallet = ?wallet,
                            "Serving cached transaction view across wallet contexts"
                        );
                    }
                    metrics::record_cache_lookup(true);
                    views.push(view);
                    continue;
                }
            }

            metrics::record_cache_lookup(false);
            let context = FormatContext {
                date_format: &self.constants.date_format,
                copy: &self.constants.copy,
                record: raw,
            };
            let view = Arc::new(self.formatter.format(&raw.tx, &context)?);

            self.parsed.insert(
                raw.hash.clone(),
                CacheEntry {
                    view: view.clone(),
                    wallet: wallet.map(str::to_string),
                },
            );
            views.push(view);
        }

        metrics::record_cache_size(self.parsed.len());
        Ok(views)
    }

    /// Drop every cached view.
    pub fn refresh(&self) {
        self.parsed.clear();
        metrics::record_cache_size(0);
        tracing::debug!("Transaction parse cache cleared");
    }

    pub fn get(&self, hash: &str) -> Option<ParsedView> {
        self.parsed.get(hash).map(|entry| entry.view.clone())
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.parsed.contains_key(hash)
    }

    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }
}

impl fmt::Debug for TransactionParseCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionParseCache")
            .field("entries", &self.parsed.len())
            .field("mode", &self.mode)
            .field("constants", &self.constants)
            .finish()
    }
}

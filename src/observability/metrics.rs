//! Metrics collection.
//!
//! # Metrics
//! - `panel_txn_cache_lookups_total` (counter): parse cache lookups by result
//! - `panel_txn_cache_entries` (gauge): cached transaction views
//! - `panel_rpc_clients_built_total` (counter): clients constructed by kind, chain
//!
//! Recorded through the `metrics` facade; a no-op until the host installs a
//! recorder.

use crate::chain::Chain;
use crate::rpc::ClientKind;

/// Record a parse cache hit or miss.
pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    ::metrics::counter!("panel_txn_cache_lookups_total", "result" => result).increment(1);
}

/// Record the number of cached views.
pub fn record_cache_size(size: usize) {
    ::metrics::gauge!("panel_txn_cache_entries").set(size as f64);
}

/// Record construction of an RPC client.
pub fn record_client_built(kind: ClientKind, chain: Chain) {
    ::metrics::counter!(
        "panel_rpc_clients_built_total",
        "kind" => kind.as_str(),
        "chain" => chain.as_str()
    )
    .increment(1);
}

//! Static explorer catalog.
//!
//! Entries are ordered slices so link output follows declaration order.

use std::fmt;

use crate::chain::{Chain, Network};

/// Chains with explorer coverage.
pub const PROTOCOLS: [Chain; 2] = [Chain::Bitcoin, Chain::BitcoinCash];

/// A named explorer and its base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerEntry {
    pub name: &'static str,
    pub base_url: &'static str,
}

/// Resource kinds an explorer can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Transaction,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Transaction => f.write_str("transaction"),
        }
    }
}

const BITCOIN_MAIN: &[ExplorerEntry] = &[
    ExplorerEntry {
        name: "btc.com",
        base_url: "https://btc.com",
    },
    ExplorerEntry {
        name: "blocktrail",
        base_url: "https://www.blocktrail.com/BTC",
    },
];

const BITCOIN_TESTNET: &[ExplorerEntry] = &[ExplorerEntry {
    name: "blocktrail",
    base_url: "https://www.blocktrail.com/tBTC",
}];

const BITCOINCASH_MAIN: &[ExplorerEntry] = &[
    ExplorerEntry {
        name: "btc.com",
        base_url: "https://bch.btc.com",
    },
    ExplorerEntry {
        name: "blocktrail",
        base_url: "https://www.blocktrail.com/BCC",
    },
];

const BITCOINCASH_TESTNET: &[ExplorerEntry] = &[ExplorerEntry {
    name: "blocktrail",
    base_url: "https://www.blocktrail.com/tBCC",
}];

/// Explorer name → (resource, URL suffix).
pub const EXPLORER_SUFFIXES: &[(&str, &[(Resource, &str)])] = &[
    ("blocktrail", &[(Resource::Transaction, "/tx/")]),
    ("btc.com", &[(Resource::Transaction, "/")]),
];

/// Explorers registered for a protocol/network pair.
pub fn explorers(protocol: Chain, network: Network) -> &'static [ExplorerEntry] {
    match (protocol, network) {
        (Chain::Bitcoin, Network::Main) => BITCOIN_MAIN,
        (Chain::Bitcoin, Network::Testnet) => BITCOIN_TESTNET,
        (Chain::BitcoinCash, Network::Main) => BITCOINCASH_MAIN,
        (Chain::BitcoinCash, Network::Testnet) => BITCOINCASH_TESTNET,
        _ => &[],
    }
}

/// URL suffix for an explorer's resource, if registered.
pub fn suffix(explorer: &str, resource: Resource) -> Option<&'static str> {
    EXPLORER_SUFFIXES
        .iter()
        .find(|(name, _)| *name == explorer)
        .and_then(|(_, suffixes)| suffixes.iter().find(|(r, _)| *r == resource))
        .map(|(_, suffix)| *suffix)
}

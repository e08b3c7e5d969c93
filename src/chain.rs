//! Supported chains and network names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A supported ledger family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Bitcoin,
    BitcoinCash,
    Handshake,
}

impl Chain {
    /// Every supported chain.
    pub const ALL: [Chain; 3] = [Chain::Bitcoin, Chain::BitcoinCash, Chain::Handshake];

    /// Lowercase chain name as used in paths and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Chain::Bitcoin => "bitcoin",
            Chain::BitcoinCash => "bitcoincash",
            Chain::Handshake => "handshake",
        }
    }

    /// Whether clients for this chain use the handshake implementations.
    pub fn is_handshake(self) -> bool {
        matches!(self, Chain::Handshake)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.as_str() == s)
            .ok_or_else(|| ValidationError::new(format!("{} is not a supported chain", s)))
    }
}

/// Network names recognised by bitcoin-family nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Testnet,
    Regtest,
    Simnet,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Testnet,
        Network::Regtest,
        Network::Simnet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Simnet => "simnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Network::ALL.iter().map(|n| n.as_str()).collect();
                ValidationError::new(format!(
                    "{} must be a valid network: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

//! Transaction permalink builder.

use url::Url;

use crate::chain::{Chain, Network};
use crate::error::ValidationError;
use crate::explorer::catalog::{self, ExplorerEntry, Resource, PROTOCOLS};
use crate::explorer::ExplorerError;

/// Builds explorer links for one protocol and network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockExplorerResolver {
    protocol: Chain,
    network: Network,
}

impl BlockExplorerResolver {
    /// Validate and store a protocol/network pair.
    pub fn new(protocol: &str, network: &str) -> Result<Self, ValidationError> {
        let protocol = PROTOCOLS
            .into_iter()
            .find(|p| p.as_str() == protocol)
            .ok_or_else(|| {
                let names: Vec<&str> = PROTOCOLS.iter().map(|p| p.as_str()).collect();
                ValidationError::new(format!(
                    "{} must be a valid protocol: {}",
                    protocol,
                    names.join(", ")
                ))
            })?;
        let network: Network = network.parse()?;

        Ok(Self { protocol, network })
    }

    /// Protocols with an explorer catalog.
    pub fn protocols() -> &'static [Chain] {
        &PROTOCOLS
    }

    pub fn protocol(&self) -> Chain {
        self.protocol
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Explorer names and base URLs for the configured pair.
    pub fn explorers(&self) -> &'static [ExplorerEntry] {
        catalog::explorers(self.protocol, self.network)
    }

    pub fn suffixes(&self) -> &'static [(&'static str, &'static [(Resource, &'static str)])] {
        catalog::EXPLORER_SUFFIXES
    }

    /// Concatenate base URL, resource suffix and id, then parse.
    pub fn link(
        &self,
        explorer: &str,
        base_url: &str,
        resource: Resource,
        id: &str,
    ) -> Result<Url, ExplorerError> {
        let suffix = catalog::suffix(explorer, resource).ok_or_else(|| {
            ValidationError::new(format!(
                "no {} suffix registered for explorer {}",
                resource, explorer
            ))
        })?;

        let link = format!("{}{}{}", base_url, suffix, id);
        Url::parse(&link).map_err(|source| ExplorerError::Url { link, source })
    }

    pub fn transaction_link(
        &self,
        explorer: &str,
        base_url: &str,
        tx_hash: &str,
    ) -> Result<Url, ExplorerError> {
        self.link(explorer, base_url, Resource::Transaction, tx_hash)
    }

    /// One link per explorer, in catalog order.
    pub fn transaction_links(&self, tx_hash: &str) -> Result<Vec<Url>, ExplorerError> {
        self.explorers()
            .iter()
            .map(|entry| self.transaction_link(entry.name, entry.base_url, tx_hash))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

    #[test]
    fn test_links_contain_hash_for_all_pairs() {
        for protocol in ["bitcoin", "bitcoincash"] {
            for network in ["main", "testnet"] {
                let resolver = BlockExplorerResolver::new(protocol, network).unwrap();
                let links = resolver.transaction_links(HASH).unwrap();
                assert_eq!(links.len(), resolver.explorers().len());
                assert!(!links.is_empty());
                for link in links {
                    assert!(link.as_str().contains(HASH));
                }
            }
        }
    }

    #[test]
    fn test_link_shapes() {
        let resolver = BlockExplorerResolver::new("bitcoin", "main").unwrap();
        let links = resolver.transaction_links("foobar").unwrap();
        assert_eq!(links[0].as_str(), "https://btc.com/foobar");
        assert_eq!(links[1].as_str(), "https://www.blocktrail.com/BTC/tx/foobar");
    }

    #[test]
    fn test_unsupported_protocol() {
        let err = BlockExplorerResolver::new("litecoin", "main").unwrap_err();
        assert!(err.message().contains("litecoin must be a valid protocol"));
        assert!(BlockExplorerResolver::new("handshake", "main").is_err());
        assert!(!BlockExplorerResolver::protocols().contains(&Chain::Handshake));
        assert!(BlockExplorerResolver::new("bitcoin", "mainnet").is_err());
    }

    #[test]
    fn test_missing_suffix() {
        let resolver = BlockExplorerResolver::new("bitcoin", "main").unwrap();
        let err = resolver
            .transaction_link("mempool.space", "https://mempool.space", HASH)
            .unwrap_err();
        assert!(matches!(err, ExplorerError::Validation(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let resolver = BlockExplorerResolver::new("bitcoin", "main").unwrap();
        let err = resolver
            .transaction_link("btc.com", "not a url", HASH)
            .unwrap_err();
        assert!(matches!(err, ExplorerError::Url { .. }));
    }

    #[test]
    fn test_regtest_has_no_explorers() {
        let resolver = BlockExplorerResolver::new("bitcoin", "regtest").unwrap();
        assert!(resolver.transaction_links(HASH).unwrap().is_empty());
    }
}

//! Lazily built, identity-scoped RPC clients.
//!
//! # Responsibilities
//! - Hold the dashboard client identity (id, chain, base path)
//! - Derive client paths as `{base_path}/{id}/{kind}`
//! - Build node and wallet clients of the flavour matching the chain
//! - Query the dashboard server for its registered clients

use serde_json::Value;

use crate::chain::Chain;
use crate::config::ConnectionConfig;
use crate::error::ValidationError;
use crate::factory::options::{ClientIdentity, ClientSet, FactoryOptions};
use crate::observability::metrics;
use crate::rpc::{
    ClientKind, ClientOptions, ClientResult, HttpClient, MultisigClient, NodeClient, RpcClient,
    WalletClient,
};

/// Owns one dashboard identity and the clients scoped to it.
#[derive(Debug)]
pub struct ClientFactory {
    identity: ClientIdentity,
    connection: ConnectionConfig,
    /// Client for the dashboard server itself, rooted at the base path.
    server: HttpClient,
    clients: ClientSet,
}

impl ClientFactory {
    /// Validate options and create a factory. No requests are sent.
    pub fn new(options: FactoryOptions) -> ClientResult<Self> {
        let (identity, connection, clients) = options.validate()?;
        let server = HttpClient::new(connection.client_options(identity.base_path.as_str()))?;

        tracing::debug!(
            chain = %identity.chain,
            base_path = %identity.base_path,
            host = %connection.host,
            port = connection.port,
            "Client factory configured"
        );

        Ok(Self {
            identity,
            connection,
            server,
            clients,
        })
    }

    /// Replace all state with a fresh configuration.
    ///
    /// Anything not set in `options` falls back to its default.
    pub fn reset(&mut self, options: FactoryOptions) -> ClientResult<&mut Self> {
        *self = Self::new(options)?;
        Ok(self)
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn id(&self) -> Option<&str> {
        Some(self.identity.id.as_str()).filter(|id| !id.is_empty())
    }

    pub fn chain(&self) -> Chain {
        self.identity.chain
    }

    pub fn base_path(&self) -> &str {
        &self.identity.base_path
    }

    pub fn connection(&self) -> &ConnectionConfig {
        &self.connection
    }

    /// Switch to another dashboard client and rebuild every RPC client.
    ///
    /// On error the previous identity and clients are kept.
    pub fn set_identity(&mut self, id: &str, chain: Option<&str>) -> ClientResult<&mut Self> {
        if id.is_empty() {
            return Err(ValidationError::new("client id must be a non-empty string").into());
        }
        let chain = match chain {
            Some(chain) => chain.parse::<Chain>()?,
            None => self.identity.chain,
        };

        let identity = ClientIdentity {
            id: id.to_string(),
            chain,
            base_path: self.identity.base_path.clone(),
        };
        let clients = ClientSet {
            node: Some(self.build_node(&identity, None)?),
            wallet: Some(self.build_wallet(&identity, None)?),
            multisig: Some(self.build_multisig(&identity, None)?),
        };

        self.identity = identity;
        self.clients = clients;
        tracing::info!(id, chain = %chain, "Client identity updated");

        Ok(self)
    }

    /// Node client for the current identity, built on first use.
    pub fn node_client(&mut self) -> ClientResult<&NodeClient> {
        let node = match self.clients.node.take() {
            Some(node) => node,
            None => self.build_node(&self.identity, None)?,
        };
        let node: &NodeClient = self.clients.node.insert(node);
        Ok(node)
    }

    /// Wallet client for the current identity, built on first use.
    pub fn wallet_client(&mut self) -> ClientResult<&WalletClient> {
        let wallet = match self.clients.wallet.take() {
            Some(wallet) => wallet,
            None => self.build_wallet(&self.identity, None)?,
        };
        let wallet: &WalletClient = self.clients.wallet.insert(wallet);
        Ok(wallet)
    }

    /// Multisig client for the current identity, built on first use.
    pub fn multisig_client(&mut self) -> ClientResult<&MultisigClient> {
        let multisig = match self.clients.multisig.take() {
            Some(multisig) => multisig,
            None => self.build_multisig(&self.identity, None)?,
        };
        let multisig: &MultisigClient = self.clients.multisig.insert(multisig);
        Ok(multisig)
    }

    /// Rebuild the node client, optionally at a custom path.
    pub fn set_node_client(&mut self, path: Option<&str>) -> ClientResult<&NodeClient> {
        let node = self.build_node(&self.identity, path)?;
        let node: &NodeClient = self.clients.node.insert(node);
        Ok(node)
    }

    /// Rebuild the wallet client, optionally at a custom path.
    pub fn set_wallet_client(&mut self, path: Option<&str>) -> ClientResult<&WalletClient> {
        let wallet = self.build_wallet(&self.identity, path)?;
        let wallet: &WalletClient = self.clients.wallet.insert(wallet);
        Ok(wallet)
    }

    /// Rebuild the multisig client, optionally at a custom path.
    pub fn set_multisig_client(&mut self, path: Option<&str>) -> ClientResult<&MultisigClient> {
        let multisig = self.build_multisig(&self.identity, path)?;
        let multisig: &MultisigClient = self.clients.multisig.insert(multisig);
        Ok(multisig)
    }

    /// Path for a client kind given by name, or `override_path` verbatim.
    pub fn derive_path(
        &self,
        kind: &str,
        override_path: Option<&str>,
    ) -> Result<String, ValidationError> {
        if let Some(path) = override_path {
            return Ok(path.to_string());
        }
        derive_path(&self.identity, kind.parse()?, None)
    }

    /// Path for a client kind, e.g. `/clients/my-node/wallet`.
    pub fn client_path(&self, kind: ClientKind) -> Result<String, ValidationError> {
        derive_path(&self.identity, kind, None)
    }

    /// All clients registered on the dashboard server.
    pub async fn get_clients(&self) -> ClientResult<Value> {
        self.server.get("/").await
    }

    /// Dashboard server info for the current client id.
    pub async fn get_client_info(&self) -> ClientResult<Value> {
        let id = self
            .id()
            .ok_or_else(|| ValidationError::new("Must have a client id to get client info"))?;
        self.server.get(&format!("/{}", id)).await
    }

    fn options_for(
        &self,
        identity: &ClientIdentity,
        kind: ClientKind,
        path: Option<&str>,
    ) -> Result<ClientOptions, ValidationError> {
        let path = derive_path(identity, kind, path)?;
        Ok(self.connection.client_options(path))
    }

    fn build_node(&self, identity: &ClientIdentity, path: Option<&str>) -> ClientResult<NodeClient> {
        let options = self.options_for(identity, ClientKind::Node, path)?;
        let node = NodeClient::for_chain(identity.chain, options)?;

        metrics::record_client_built(ClientKind::Node, identity.chain);
        tracing::debug!(path = node.path(), chain = %identity.chain, "Node client built");
        Ok(node)
    }

    fn build_wallet(
        &self,
        identity: &ClientIdentity,
        path: Option<&str>,
    ) -> ClientResult<WalletClient> {
        let options = self.options_for(identity, ClientKind::Wallet, path)?;
        let wallet = WalletClient::for_chain(identity.chain, options)?;

        metrics::record_client_built(ClientKind::Wallet, identity.chain);
        tracing::debug!(path = wallet.path(), chain = %identity.chain, "Wallet client built");
        Ok(wallet)
    }

    fn build_multisig(
        &self,
        identity: &ClientIdentity,
        path: Option<&str>,
    ) -> ClientResult<MultisigClient> {
        let options = self.options_for(identity, ClientKind::Multisig, path)?;
        let multisig = MultisigClient::new(options)?;

        metrics::record_client_built(ClientKind::Multisig, identity.chain);
        tracing::debug!(path = multisig.path(), "Multisig client built");
        Ok(multisig)
    }
}

fn derive_path(
    identity: &ClientIdentity,
    kind: ClientKind,
    override_path: Option<&str>,
) -> Result<String, ValidationError> {
    if let Some(path) = override_path {
        return Ok(path.to_string());
    }
    if identity.id.is_empty() {
        return Err(ValidationError::new("Must have a client id to get client path"));
    }
    Ok(format!("{}/{}/{}", identity.base_path, identity.id, kind))
}

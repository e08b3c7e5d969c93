//! Factory options and their validation.

use crate::chain::Chain;
use crate::config::{ConnectionConfig, PanelConfig};
use crate::error::ValidationError;
use crate::rpc::{MultisigClient, NodeClient, RpcClient, WalletClient};

/// Base path used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/clients";

/// Which dashboard client the factory talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Empty until an id is configured or set.
    pub id: String,
    pub chain: Chain,
    pub base_path: String,
}

/// At most one client of each kind.
#[derive(Debug, Clone, Default)]
pub struct ClientSet {
    pub node: Option<NodeClient>,
    pub wallet: Option<WalletClient>,
    pub multisig: Option<MultisigClient>,
}

/// Unvalidated factory configuration.
#[derive(Debug, Clone, Default)]
pub struct FactoryOptions {
    pub id: Option<String>,
    /// One of bitcoin, bitcoincash, handshake; bitcoin when absent.
    pub chain: Option<String>,
    /// Defaults to [`DEFAULT_BASE_PATH`].
    pub base_path: Option<String>,
    pub connection: ConnectionConfig,
    pub node: Option<NodeClient>,
    pub wallet: Option<WalletClient>,
    pub multisig: Option<MultisigClient>,
}

impl FactoryOptions {
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            id: config.client.id.clone(),
            chain: Some(config.client.chain.clone()),
            base_path: Some(config.client.base_path.clone()),
            connection: config.connection.clone(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_connection(mut self, connection: ConnectionConfig) -> Self {
        self.connection = connection;
        self
    }

    pub fn with_node(mut self, node: NodeClient) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_wallet(mut self, wallet: WalletClient) -> Self {
        self.wallet = Some(wallet);
        self
    }

    pub fn with_multisig(mut self, multisig: MultisigClient) -> Self {
        self.multisig = Some(multisig);
        self
    }

    /// Check names and injected clients against the configured chain.
    pub(crate) fn validate(
        self,
    ) -> Result<(ClientIdentity, ConnectionConfig, ClientSet), ValidationError> {
        let chain = match self.chain.as_deref() {
            Some(chain) => chain.parse::<Chain>()?,
            None => Chain::default(),
        };

        let base_path = match self.base_path {
            Some(path) if !path.is_empty() => path,
            _ => DEFAULT_BASE_PATH.to_string(),
        };
        if !base_path.starts_with('/') {
            return Err(ValidationError::new(format!(
                "base path must start with '/', got '{}'",
                base_path
            )));
        }

        check_client(self.node.as_ref(), chain)?;
        check_client(self.wallet.as_ref(), chain)?;
        check_client(self.multisig.as_ref(), chain)?;

        let identity = ClientIdentity {
            id: self.id.unwrap_or_default(),
            chain,
            base_path,
        };
        let clients = ClientSet {
            node: self.node,
            wallet: self.wallet,
            multisig: self.multisig,
        };

        Ok((identity, self.connection, clients))
    }
}

fn check_client<C: RpcClient>(client: Option<&C>, chain: Chain) -> Result<(), ValidationError> {
    match client {
        Some(client) if !client.supports(chain) => Err(ValidationError::new(format!(
            "{} client at {} does not support chain {}",
            client.kind(),
            client.path(),
            chain
        ))),
        _ => Ok(()),
    }
}

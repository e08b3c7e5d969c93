//! Full-node clients.
//!
//! Both flavours share the REST surface of the node HTTP server; the
//! handshake client adds name-system calls.

use serde_json::{json, Value};

use crate::chain::Chain;
use crate::rpc::http::{ClientOptions, HttpClient};
use crate::rpc::types::{ClientKind, ClientResult, RpcClient};

/// Client for bitcoin and bitcoincash nodes.
#[derive(Debug, Clone)]
pub struct BitcoinNodeClient {
    http: HttpClient,
}

impl BitcoinNodeClient {
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(options)?,
        })
    }
}

/// Client for handshake nodes.
#[derive(Debug, Clone)]
pub struct HandshakeNodeClient {
    http: HttpClient,
}

impl HandshakeNodeClient {
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(options)?,
        })
    }

    /// Auction and ownership state for a name.
    pub async fn get_name_info(&self, name: &str) -> ClientResult<Value> {
        self.http.execute("getnameinfo", json!([name])).await
    }

    /// Resource records published for a name.
    pub async fn get_name_resource(&self, name: &str) -> ClientResult<Value> {
        self.http.execute("getnameresource", json!([name])).await
    }
}

/// A node client of either flavour.
#[derive(Debug, Clone)]
pub enum NodeClient {
    Bitcoin(BitcoinNodeClient),
    Handshake(HandshakeNodeClient),
}

impl NodeClient {
    /// Pick the implementation matching `chain`.
    pub fn for_chain(chain: Chain, options: ClientOptions) -> ClientResult<Self> {
        if chain.is_handshake() {
            Ok(NodeClient::Handshake(HandshakeNodeClient::new(options)?))
        } else {
            Ok(NodeClient::Bitcoin(BitcoinNodeClient::new(options)?))
        }
    }

    pub fn is_handshake(&self) -> bool {
        matches!(self, NodeClient::Handshake(_))
    }

    pub fn as_handshake(&self) -> Option<&HandshakeNodeClient> {
        match self {
            NodeClient::Handshake(client) => Some(client),
            NodeClient::Bitcoin(_) => None,
        }
    }

    /// Node status, chain tip and network.
    pub async fn get_info(&self) -> ClientResult<Value> {
        self.http().get("/").await
    }

    pub async fn get_mempool(&self) -> ClientResult<Value> {
        self.http().get("/mempool").await
    }

    pub async fn get_tx(&self, hash: &str) -> ClientResult<Value> {
        self.http().get(&format!("/tx/{}", hash)).await
    }

    /// Block by hash or height.
    pub async fn get_block(&self, block: &str) -> ClientResult<Value> {
        self.http().get(&format!("/block/{}", block)).await
    }

    pub async fn get_coins_by_address(&self, address: &str) -> ClientResult<Value> {
        self.http().get(&format!("/coin/address/{}", address)).await
    }

    pub async fn estimate_fee(&self, blocks: u32) -> ClientResult<Value> {
        self.http().get_with_query("/fee", &[("blocks", blocks)]).await
    }

    pub async fn broadcast(&self, tx_hex: &str) -> ClientResult<Value> {
        self.http().post("/broadcast", &json!({ "tx": tx_hex })).await
    }

    /// Raw JSON-RPC passthrough.
    pub async fn execute(&self, method: &str, params: Value) -> ClientResult<Value> {
        self.http().execute(method, params).await
    }
}

impl RpcClient for NodeClient {
    fn kind(&self) -> ClientKind {
        ClientKind::Node
    }

    fn supports(&self, chain: Chain) -> bool {
        match self {
            NodeClient::Bitcoin(_) => matches!(chain, Chain::Bitcoin | Chain::BitcoinCash),
            NodeClient::Handshake(_) => chain.is_handshake(),
        }
    }

    fn http(&self) -> &HttpClient {
        match self {
            NodeClient::Bitcoin(client) => &client.http,
            NodeClient::Handshake(client) => &client.http,
        }
    }
}

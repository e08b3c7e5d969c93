//! RPC clients for nodes, wallets and multisig coordinators.
//!
//! # Data Flow
//! ```text
//! ClientOptions (host, port, ssl, path)
//!     → http.rs (reqwest-backed REST + JSON-RPC transport)
//!     → node.rs / wallet.rs (bitcoin or handshake flavour)
//!     → multisig.rs (chain independent)
//! ```
//!
//! # Constraints
//! - Construction never touches the network
//! - RPC failures propagate unchanged to the caller
//! - No retries or backoff at this layer

pub mod http;
pub mod multisig;
pub mod node;
pub mod types;
pub mod wallet;

pub use http::{ClientOptions, HttpClient};
pub use multisig::MultisigClient;
pub use node::{BitcoinNodeClient, HandshakeNodeClient, NodeClient};
pub use types::{ClientError, ClientKind, ClientResult, RpcClient};
pub use wallet::{BitcoinWalletClient, HandshakeWalletClient, WalletClient};

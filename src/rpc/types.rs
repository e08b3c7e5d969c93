//! Client kinds, capability trait and error definitions.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::chain::Chain;
use crate::error::ValidationError;
use crate::rpc::http::HttpClient;

/// The three client kinds served per dashboard client id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    Node,
    Wallet,
    Multisig,
}

impl ClientKind {
    pub const ALL: [ClientKind; 3] = [ClientKind::Node, ClientKind::Wallet, ClientKind::Multisig];

    /// Path segment for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientKind::Node => "node",
            ClientKind::Wallet => "wallet",
            ClientKind::Multisig => "multisig",
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::new(format!("Client type \"{}\" is not supported", s)))
    }
}

/// Capabilities every RPC client exposes.
///
/// Injected clients are checked through this trait rather than by
/// concrete type.
pub trait RpcClient {
    fn kind(&self) -> ClientKind;

    /// Whether this client can talk to a backend running `chain`.
    fn supports(&self, chain: Chain) -> bool;

    fn http(&self) -> &HttpClient;

    fn path(&self) -> &str {
        self.http().options().path.as_str()
    }
}

/// Errors that can occur while building or using an RPC client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport failure reported by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// JSON-RPC error object returned by the server.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Request URL could not be built.
    #[error("Invalid client URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_kind_parse() {
        assert_eq!("wallet".parse::<ClientKind>().unwrap(), ClientKind::Wallet);
        let err = "miner".parse::<ClientKind>().unwrap_err();
        assert_eq!(err.message(), "Client type \"miner\" is not supported");
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Rpc {
            code: -32601,
            message: "Method not found".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error -32601: Method not found");

        let err = ClientError::from(ValidationError::new("bad id"));
        assert_eq!(err.to_string(), "Validation error: bad id");
    }
}

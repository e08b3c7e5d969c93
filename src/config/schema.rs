//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ValidationError;
use crate::rpc::ClientOptions;
use crate::txn::TxnConstants;

/// Root configuration for dashboard helpers.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PanelConfig {
    /// Where the dashboard server listens.
    pub connection: ConnectionConfig,

    /// Which dashboard client to talk to.
    pub client: ClientConfig,

    /// Block explorer protocol and network.
    pub explorer: ExplorerConfig,

    /// Transaction view formatting.
    pub transactions: TxnConstants,

    pub observability: ObservabilityConfig,
}

/// Dashboard server connection settings shared by every RPC client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: String,

    pub port: u16,

    /// Use https.
    pub ssl: bool,

    /// API key for basic auth, if the server requires one.
    pub api_key: Option<String>,

    /// Per-request timeout in seconds (0 disables).
    pub timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5000,
            ssl: false,
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl ConnectionConfig {
    /// Derive host, port and ssl from the dashboard's origin URL.
    ///
    /// A missing port falls back to 443 for https and 80 for http.
    pub fn from_origin(origin: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(origin)
            .map_err(|e| ValidationError::new(format!("invalid origin '{}': {}", origin, e)))?;

        let ssl = match url.scheme() {
            "https" => true,
            "http" => false,
            other => {
                return Err(ValidationError::new(format!(
                    "origin scheme must be http or https, got '{}'",
                    other
                )))
            }
        };
        let host = url
            .host_str()
            .ok_or_else(|| ValidationError::new(format!("origin '{}' has no host", origin)))?;
        let port = url.port().unwrap_or(if ssl { 443 } else { 80 });

        Ok(Self {
            host: host.to_string(),
            port,
            ssl,
            ..Self::default()
        })
    }

    /// Client options for a base path on this server.
    pub fn client_options(&self, path: impl Into<String>) -> ClientOptions {
        ClientOptions {
            host: self.host.clone(),
            port: self.port,
            ssl: self.ssl,
            path: path.into(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Dashboard client selection.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Client id registered on the dashboard server.
    pub id: Option<String>,

    /// One of bitcoin, bitcoincash, handshake.
    pub chain: String,

    /// Prefix for all client paths.
    pub base_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            id: None,
            chain: "bitcoin".to_string(),
            base_path: "/clients".to_string(),
        }
    }
}

/// Explorer link settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub protocol: String,
    pub network: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            protocol: "bitcoin".to_string(),
            network: "main".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

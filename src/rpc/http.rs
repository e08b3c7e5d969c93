//! HTTP transport shared by every RPC client.
//!
//! # Responsibilities
//! - Build request URLs from host, port, ssl and base path
//! - Issue REST `GET`/`POST` calls and decode JSON bodies
//! - Issue JSON-RPC calls against the base path

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::rpc::types::{ClientError, ClientResult};

/// Connection settings for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub host: String,
    pub port: u16,
    pub ssl: bool,
    /// Base path every endpoint is appended to, e.g. `/clients/my-node/node`.
    pub path: String,
    /// Sent as the basic-auth password when present.
    pub api_key: Option<String>,
    /// Per-request timeout; zero disables it.
    pub timeout_secs: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5000,
            ssl: false,
            path: String::new(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl ClientOptions {
    /// Copy of these options with a different base path.
    pub fn with_path(&self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    pub fn origin(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }

    /// Full URL for an endpoint relative to the base path.
    pub fn url(&self, endpoint: &str) -> ClientResult<Url> {
        let base = self.path.trim_end_matches('/');
        let raw = if endpoint.starts_with('/') {
            format!("{}{}{}", self.origin(), base, endpoint)
        } else {
            format!("{}{}/{}", self.origin(), base, endpoint)
        };

        Url::parse(&raw).map_err(|source| ClientError::Url { url: raw, source })
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Thin reqwest wrapper bound to one base path.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    options: ClientOptions,
    /// JSON-RPC request id counter.
    sequence: Arc<AtomicU64>,
}

impl HttpClient {
    /// Create a client. Does not open any connection.
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if options.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(options.timeout_secs));
        }

        Ok(Self {
            inner: builder.build()?,
            options,
            sequence: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        let url = self.options.url(endpoint)?;
        self.send(self.inner.get(url.clone()), url).await
    }

    pub async fn get_with_query<T, Q>(&self, endpoint: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.options.url(endpoint)?;
        self.send(self.inner.get(url.clone()).query(query), url).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.options.url(endpoint)?;
        self.send(self.inner.post(url.clone()).json(body), url).await
    }

    /// Call a JSON-RPC method on the base path.
    pub async fn execute<T: DeserializeOwned>(&self, method: &str, params: Value) -> ClientResult<T> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "method": method,
            "params": params,
            "id": id,
        });

        let response: RpcResponse = self.post("/", &body).await?;
        if let Some(error) = response.error {
            tracing::debug!(method, code = error.code, "RPC call returned error");
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(serde_json::from_value(response.result)?)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: Url) -> ClientResult<T> {
        let request = match &self.options.api_key {
            Some(key) => request.basic_auth("x", Some(key)),
            None => request,
        };

        tracing::trace!(url = %url, "Sending request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(url = %url, status = status.as_u16(), "Request failed");
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

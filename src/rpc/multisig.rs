//! Multisig coordinator client.

use serde_json::{json, Value};

use crate::chain::Chain;
use crate::rpc::http::{ClientOptions, HttpClient};
use crate::rpc::types::{ClientKind, ClientResult, RpcClient};

/// Client for a multisig coordination server. Chain independent.
#[derive(Debug, Clone)]
pub struct MultisigClient {
    http: HttpClient,
}

impl MultisigClient {
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(options)?,
        })
    }

    pub async fn get_wallets(&self) -> ClientResult<Value> {
        self.http.get("/multisig").await
    }

    pub async fn get_info(&self, wallet: &str) -> ClientResult<Value> {
        self.http.get(&format!("/multisig/{}", wallet)).await
    }

    pub async fn get_proposals(&self, wallet: &str) -> ClientResult<Value> {
        self.http
            .get(&format!("/multisig/{}/proposal", wallet))
            .await
    }

    pub async fn get_proposal(&self, wallet: &str, proposal: &str) -> ClientResult<Value> {
        self.http
            .get(&format!("/multisig/{}/proposal/{}", wallet, proposal))
            .await
    }

    /// Register a new cosigner-coordinated wallet.
    pub async fn create_wallet(&self, wallet: &str, m: u8, n: u8) -> ClientResult<Value> {
        self.http
            .post(&format!("/multisig/{}", wallet), &json!({ "m": m, "n": n }))
            .await
    }
}

impl RpcClient for MultisigClient {
    fn kind(&self) -> ClientKind {
        ClientKind::Multisig
    }

    fn supports(&self, _chain: Chain) -> bool {
        true
    }

    fn http(&self) -> &HttpClient {
        &self.http
    }
}

//! Wallet clients.

use serde_json::{json, Value};

use crate::chain::Chain;
use crate::rpc::http::{ClientOptions, HttpClient};
use crate::rpc::types::{ClientKind, ClientResult, RpcClient};

/// Client for bitcoin and bitcoincash wallet servers.
#[derive(Debug, Clone)]
pub struct BitcoinWalletClient {
    http: HttpClient,
}

impl BitcoinWalletClient {
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(options)?,
        })
    }
}

/// Client for handshake wallet servers.
#[derive(Debug, Clone)]
pub struct HandshakeWalletClient {
    http: HttpClient,
}

impl HandshakeWalletClient {
    pub fn new(options: ClientOptions) -> ClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(options)?,
        })
    }

    /// Names owned or watched by a wallet.
    pub async fn get_names(&self, wallet: &str) -> ClientResult<Value> {
        self.http.get(&format!("/wallet/{}/name", wallet)).await
    }

    /// Auctions a wallet has participated in.
    pub async fn get_auctions(&self, wallet: &str) -> ClientResult<Value> {
        self.http.get(&format!("/wallet/{}/auction", wallet)).await
    }
}

/// A wallet client of either flavour.
#[derive(Debug, Clone)]
pub enum WalletClient {
    Bitcoin(BitcoinWalletClient),
    Handshake(HandshakeWalletClient),
}

impl WalletClient {
    /// Pick the implementation matching `chain`.
    pub fn for_chain(chain: Chain, options: ClientOptions) -> ClientResult<Self> {
        if chain.is_handshake() {
            Ok(WalletClient::Handshake(HandshakeWalletClient::new(options)?))
        } else {
            Ok(WalletClient::Bitcoin(BitcoinWalletClient::new(options)?))
        }
    }

    pub fn is_handshake(&self) -> bool {
        matches!(self, WalletClient::Handshake(_))
    }

    pub fn as_handshake(&self) -> Option<&HandshakeWalletClient> {
        match self {
            WalletClient::Handshake(client) => Some(client),
            WalletClient::Bitcoin(_) => None,
        }
    }

    /// Wallet ids known to the server.
    pub async fn get_wallets(&self) -> ClientResult<Value> {
        self.http().get("/wallet").await
    }

    pub async fn get_info(&self, wallet: &str) -> ClientResult<Value> {
        self.http().get(&format!("/wallet/{}", wallet)).await
    }

    pub async fn get_account(&self, wallet: &str, account: &str) -> ClientResult<Value> {
        self.http()
            .get(&format!("/wallet/{}/account/{}", wallet, account))
            .await
    }

    pub async fn get_balance(&self, wallet: &str, account: Option<&str>) -> ClientResult<Value> {
        let endpoint = format!("/wallet/{}/balance", wallet);
        match account {
            Some(account) => {
                self.http()
                    .get_with_query(&endpoint, &[("account", account)])
                    .await
            }
            None => self.http().get(&endpoint).await,
        }
    }

    /// Transaction history records, the input of the parse cache.
    pub async fn get_history(&self, wallet: &str, account: Option<&str>) -> ClientResult<Value> {
        let endpoint = format!("/wallet/{}/tx/history", wallet);
        match account {
            Some(account) => {
                self.http()
                    .get_with_query(&endpoint, &[("account", account)])
                    .await
            }
            None => self.http().get(&endpoint).await,
        }
    }

    pub async fn get_pending(&self, wallet: &str) -> ClientResult<Value> {
        self.http()
            .get(&format!("/wallet/{}/tx/unconfirmed", wallet))
            .await
    }

    pub async fn create_address(&self, wallet: &str, account: &str) -> ClientResult<Value> {
        self.http()
            .post(
                &format!("/wallet/{}/address", wallet),
                &json!({ "account": account }),
            )
            .await
    }
}

impl RpcClient for WalletClient {
    fn kind(&self) -> ClientKind {
        ClientKind::Wallet
    }

    fn supports(&self, chain: Chain) -> bool {
        match self {
            WalletClient::Bitcoin(_) => matches!(chain, Chain::Bitcoin | Chain::BitcoinCash),
            WalletClient::Handshake(_) => chain.is_handshake(),
        }
    }

    fn http(&self) -> &HttpClient {
        match self {
            WalletClient::Bitcoin(client) => &client.http,
            WalletClient::Handshake(client) => &client.http,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handshake_wallet_rejects_bitcoin() {
        let options = ClientOptions::default().with_path("/clients/w/wallet");
        let wallet = WalletClient::for_chain(Chain::Handshake, options).unwrap();
        assert!(wallet.is_handshake());
        assert!(wallet.supports(Chain::Handshake));
        assert!(!wallet.supports(Chain::Bitcoin));
        assert_eq!(wallet.kind(), ClientKind::Wallet);
    }
}

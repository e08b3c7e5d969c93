//! Factory-built clients against a mock dashboard server.

mod common;

use common::{start_echo_backend, start_programmable_backend};
use serde_json::{json, Value};
use std::net::SocketAddr;

use panel_utils::config::ConnectionConfig;
use panel_utils::factory::{ClientFactory, FactoryOptions};
use panel_utils::rpc::ClientError;
use panel_utils::txn::{RawTransaction, TransactionParseCache, TxnCacheOptions};

/// One input, outputs of 30000 and 15000 satoshis.
const PAYMENT_HEX: &str = "020000000111111111111111111111111111111111111111111111111111111111111111110000000000ffffffff0230750000000000001976a914010101010101010101010101010101010101010188ac983a0000000000001976a914020202020202020202020202020202020202020288ac00000000";

fn connection(addr: SocketAddr) -> ConnectionConfig {
    ConnectionConfig {
        host: addr.ip().to_string(),
        port: addr.port(),
        timeout_secs: 5,
        ..ConnectionConfig::default()
    }
}

fn factory(addr: SocketAddr, id: &str, chain: &str) -> ClientFactory {
    ClientFactory::new(
        FactoryOptions::default()
            .with_connection(connection(addr))
            .with_id(id)
            .with_chain(chain),
    )
    .unwrap()
}

#[tokio::test]
async fn test_dashboard_queries() {
    let (addr, log) = start_echo_backend().await;
    let factory = factory(addr, "node1", "bitcoin");

    let clients = factory.get_clients().await.unwrap();
    assert_eq!(clients["target"], "/clients/");

    let info = factory.get_client_info().await.unwrap();
    assert_eq!(info["target"], "/clients/node1");

    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_client_info_requires_id() {
    let (addr, log) = start_echo_backend().await;
    let factory = ClientFactory::new(FactoryOptions::default().with_connection(connection(addr)))
        .unwrap();

    assert!(matches!(
        factory.get_client_info().await,
        Err(ClientError::Validation(_))
    ));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_node_and_wallet_paths() {
    let (addr, _log) = start_echo_backend().await;
    let mut factory = factory(addr, "node1", "bitcoin");

    let node = factory.node_client().unwrap();
    assert_eq!(node.get_info().await.unwrap()["target"], "/clients/node1/node/");
    assert_eq!(
        node.get_tx("abc").await.unwrap()["target"],
        "/clients/node1/node/tx/abc"
    );
    assert_eq!(
        node.estimate_fee(3).await.unwrap()["target"],
        "/clients/node1/node/fee?blocks=3"
    );

    let wallet = factory.wallet_client().unwrap();
    assert_eq!(
        wallet.get_balance("primary", Some("default")).await.unwrap()["target"],
        "/clients/node1/wallet/wallet/primary/balance?account=default"
    );

    let multisig = factory.multisig_client().unwrap();
    let proposals = multisig.get_proposals("shared").await.unwrap();
    assert_eq!(proposals["target"], "/clients/node1/multisig/multisig/shared/proposal");
}

#[tokio::test]
async fn test_identity_switch_redirects_requests() {
    let (addr, log) = start_echo_backend().await;
    let mut factory = factory(addr, "alpha", "bitcoin");

    factory.node_client().unwrap().get_info().await.unwrap();
    factory.set_identity("beta", None).unwrap();
    factory.node_client().unwrap().get_info().await.unwrap();

    let targets: Vec<String> = log
        .lock()
        .unwrap()
        .iter()
        .map(|request| request.target.clone())
        .collect();
    assert_eq!(targets, vec!["/clients/alpha/node/", "/clients/beta/node/"]);
}

#[tokio::test]
async fn test_handshake_name_rpc() {
    let (addr, log) = start_programmable_backend(|request| async move {
        let call = request.json();
        let body = json!({
            "result": { "name": call["params"][0], "method": call["method"] },
            "error": null,
            "id": call["id"],
        });
        (200, body.to_string())
    })
    .await;
    let mut factory = factory(addr, "hs1", "handshake");

    let node = factory.node_client().unwrap();
    let handshake = node.as_handshake().unwrap();
    let info = handshake.get_name_info("example").await.unwrap();

    assert_eq!(info["name"], "example");
    assert_eq!(info["method"], "getnameinfo");

    let requests = log.lock().unwrap();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/clients/hs1/node/");
}

#[tokio::test]
async fn test_rpc_error_is_surfaced() {
    let (addr, _log) = start_programmable_backend(|_| async move {
        let body = json!({
            "result": null,
            "error": { "code": -8, "message": "Name not found." },
            "id": 0,
        });
        (200, body.to_string())
    })
    .await;
    let mut factory = factory(addr, "n1", "bitcoin");

    let err = factory
        .node_client()
        .unwrap()
        .execute("getnameinfo", json!(["missing"]))
        .await
        .unwrap_err();
    match err {
        ClientError::Rpc { code, message } => {
            assert_eq!(code, -8);
            assert_eq!(message, "Name not found.");
        }
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_status_is_surfaced() {
    let (addr, _log) = start_programmable_backend(|_| async move {
        (503, json!({ "error": "node offline" }).to_string())
    })
    .await;
    let mut factory = factory(addr, "n1", "bitcoin");

    let err = factory.wallet_client().unwrap().get_wallets().await.unwrap_err();
    match err {
        ClientError::Status { status, url, body } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/clients/n1/wallet/wallet"));
            assert!(body.contains("node offline"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_key_sent_as_basic_auth() {
    let (addr, log) = start_echo_backend().await;
    let mut connection = connection(addr);
    connection.api_key = Some("secret".to_string());
    let factory = ClientFactory::new(FactoryOptions::default().with_connection(connection))
        .unwrap();

    factory.get_clients().await.unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(requests[0].header("authorization"), Some("Basic eDpzZWNyZXQ="));
}

#[tokio::test]
async fn test_history_into_parse_cache() {
    let (addr, log) = start_programmable_backend(|_| async move {
        let history = json!([{
            "hash": "aa",
            "tx": PAYMENT_HEX,
            "height": -1,
            "mtime": 1231006505,
            "inputs": [{ "value": null, "address": null }],
            "outputs": [
                { "value": 30000, "address": "addr-ours", "path": { "account": 0 } },
                { "value": 15000, "address": "addr-theirs" }
            ]
        }]);
        (200, history.to_string())
    })
    .await;
    let mut factory = factory(addr, "n1", "bitcoin");

    let history = factory
        .wallet_client()
        .unwrap()
        .get_history("primary", None)
        .await
        .unwrap();
    let records: Vec<RawTransaction> = serde_json::from_value(history).unwrap();

    let cache = TransactionParseCache::new(TxnCacheOptions::default()).unwrap();
    let views = cache.parse(&records, Some("primary"), false).unwrap();
    let view: &Value = &views[0];

    assert_eq!(view["type"], "Received");
    assert_eq!(view["amount"], 30_000);
    assert_eq!(view["pending"], true);
    assert!(cache.contains("aa"));
    assert_eq!(
        log.lock().unwrap()[0].target,
        "/clients/n1/wallet/wallet/primary/tx/history"
    );
}

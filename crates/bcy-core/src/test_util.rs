//! Shared test helpers for `bcy-core` unit tests.
//!
//! Every HTTP-level test runs against a local `wiremock` server; these
//! helpers start one and point a client at it.

use wiremock::MockServer;

use crate::client::BlockCypher;
use crate::config::ClientConfig;

pub async fn mock_server() -> MockServer {
    MockServer::start().await
}

/// A `btc/main` client aimed at `server`, authenticated when `token` is
/// non-empty.
pub fn client_for(server: &MockServer, token: &str) -> BlockCypher {
    client_on(server, "btc", "main", token)
}

pub fn client_on(server: &MockServer, coin: &str, chain: &str, token: &str) -> BlockCypher {
    let config = ClientConfig::new(coin, chain)
        .with_token(token)
        .with_base_url(server.uri());
    BlockCypher::new(config).expect("test client must build")
}

/// Number of requests the server has received so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}

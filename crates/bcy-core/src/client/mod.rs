//! Request plumbing shared by every endpoint.
//!
//! [`BlockCypher`] owns the caller's [`ClientConfig`] and a `reqwest`
//! client. URL composition lives in `url`, the four verb helpers in
//! `transport`, and failure-body decoding in `envelope`. Endpoint methods in
//! `crate::api` only pick a path, parameters, and a result shape.

mod envelope;
mod transport;
mod url;

pub use self::url::{query, QueryParams};
pub(crate) use self::url::path_id;

use std::time::Duration;

use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::BcyError;

/// Async client for one coin/chain of the BlockCypher API.
///
/// Holds no per-call state: every method builds its own URL, performs one
/// round trip, and returns. A single instance can be shared across tasks.
#[derive(Debug, Clone)]
pub struct BlockCypher {
    config: ClientConfig,
    http: reqwest::Client,
}

impl BlockCypher {
    /// Build a client after validating `config`.
    pub fn new(config: ClientConfig) -> Result<Self, BcyError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()?;
        Self::with_http_client(config, http)
    }

    /// Build a client around a caller-configured `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self, BcyError> {
        config.validate()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The request target for `path` with optional query parameters and the
    /// configured token.
    pub fn url(&self, path: &str, params: Option<&QueryParams>) -> Result<Url, BcyError> {
        self::url::build_url(&self.config, path, params)
    }
}

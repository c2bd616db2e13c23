//! Caller-owned client configuration.
//!
//! A [`ClientConfig`] fixes the service base address, the coin/chain pair
//! every request is routed to, and the optional API token. It is never
//! mutated once a client has been built from it.

use reqwest::Url;

use crate::error::BcyError;

/// Public BlockCypher API host.
pub const DEFAULT_BASE_URL: &str = "https://api.blockcypher.com";

/// Fixed API version segment inserted after the host.
pub const API_VERSION: &str = "v1";

/// Query parameter carrying the API token.
pub const TOKEN_PARAM: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API token; empty means unauthenticated.
    pub token: String,
    /// Coin symbol, e.g. `btc`, `ltc`, `doge`, `bcy`.
    pub coin: String,
    /// Chain within the coin, e.g. `main`, `test3`, `test`.
    pub chain: String,
    /// Scheme and host (optionally a port) of the service.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(coin: impl Into<String>, chain: impl Into<String>) -> Self {
        Self {
            token: String::new(),
            coin: coin.into(),
            chain: chain.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Check that the base address is an HTTP(S) URL and that coin and chain
    /// are usable as single path segments.
    pub fn validate(&self) -> Result<(), BcyError> {
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            BcyError::UrlConstruction(format!(
                "invalid base URL `{}`: expected HTTP(S) URL ({e})",
                self.base_url
            ))
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(BcyError::UrlConstruction(format!(
                    "unsupported base URL scheme `{other}`; expected http or https"
                )));
            }
        }
        validate_segment("coin", &self.coin)?;
        validate_segment("chain", &self.chain)
    }
}

/// Reject values that would change the URL structure when spliced in as one
/// path segment. URL parsing treats `\` as `/` and collapses `.`/`..`
/// segments (percent-encoded or not), so those are refused too.
pub(crate) fn validate_segment(what: &str, value: &str) -> Result<(), BcyError> {
    if value.is_empty() {
        return Err(BcyError::UrlConstruction(format!("{what} must not be empty")));
    }
    if value == "." || value == ".." {
        return Err(BcyError::UrlConstruction(format!(
            "{what} `{value}` is not a usable path segment"
        )));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace())
    {
        return Err(BcyError::UrlConstruction(format!(
            "{what} `{value}` contains forbidden character {bad:?}"
        )));
    }
    Ok(())
}

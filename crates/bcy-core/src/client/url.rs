use std::collections::{BTreeMap, HashMap};

use reqwest::Url;

use crate::config::{validate_segment, ClientConfig, API_VERSION, TOKEN_PARAM};
use crate::error::BcyError;

/// Caller-supplied query parameters. Values must already be stringified.
pub type QueryParams = HashMap<String, String>;

/// Compose `<base>/v1/<coin>/<chain><path>?<params>` for one request.
///
/// Caller parameters are applied first; the token is set afterwards so it
/// replaces any caller value stored under the reserved name. An empty token
/// adds nothing. Pairs are encoded in key order.
pub(crate) fn build_url(
    config: &ClientConfig,
    path: &str,
    params: Option<&QueryParams>,
) -> Result<Url, BcyError> {
    validate_segment("coin", &config.coin)?;
    validate_segment("chain", &config.chain)?;
    if !path.is_empty() && !path.starts_with('/') {
        return Err(BcyError::UrlConstruction(format!(
            "resource path `{path}` must start with `/`"
        )));
    }
    if path.contains(['?', '#']) {
        return Err(BcyError::UrlConstruction(format!(
            "resource path `{path}` must not carry a query or fragment"
        )));
    }

    let raw = format!(
        "{}/{API_VERSION}/{}/{}{path}",
        config.base_url.trim_end_matches('/'),
        config.coin,
        config.chain,
    );
    let mut target = Url::parse(&raw)
        .map_err(|e| BcyError::UrlConstruction(format!("invalid request URL `{raw}`: {e}")))?;

    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    if let Some(params) = params {
        for (key, value) in params {
            merged.insert(key, value);
        }
    }
    if config.is_authenticated() {
        merged.insert(TOKEN_PARAM, &config.token);
    }

    if !merged.is_empty() {
        target.query_pairs_mut().extend_pairs(merged);
    }
    Ok(target)
}

/// Reject identifiers that would escape their path segment. Same rules as
/// coin and chain; `;` stays allowed for batched addresses.
pub(crate) fn path_id<'a>(what: &str, id: &'a str) -> Result<&'a str, BcyError> {
    validate_segment(what, id)?;
    Ok(id)
}

/// Build a [`QueryParams`] map from borrowed pairs.
pub fn query<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> QueryParams {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str) -> ClientConfig {
        ClientConfig::new("btc", "main")
            .with_token(token)
            .with_base_url("https://api.example")
    }

    fn token_count(url: &Url) -> usize {
        url.query_pairs().filter(|(k, _)| k == TOKEN_PARAM).count()
    }

    #[test]
    fn balance_url_with_token() {
        let url = build_url(&config("abc"), "/addrs/1A2b/balance", None).expect("must build");
        assert_eq!(
            url.as_str(),
            "https://api.example/v1/btc/main/addrs/1A2b/balance?token=abc"
        );
    }

    #[test]
    fn empty_token_adds_no_query() {
        let url = build_url(&config(""), "/blocks/100", None).expect("must build");
        assert_eq!(url.as_str(), "https://api.example/v1/btc/main/blocks/100");
        assert_eq!(token_count(&url), 0);
    }

    #[test]
    fn empty_path_targets_chain_root() {
        let url = build_url(&config(""), "", None).expect("must build");
        assert_eq!(url.as_str(), "https://api.example/v1/btc/main");
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let cfg = config("").with_base_url("https://api.example/");
        let url = build_url(&cfg, "/txs", None).expect("must build");
        assert_eq!(url.as_str(), "https://api.example/v1/btc/main/txs");
    }

    #[test]
    fn token_overrides_caller_value_under_reserved_name() {
        let params = query([("token", "spoofed".to_owned()), ("limit", "5".to_owned())]);
        let url = build_url(&config("real"), "/txs", Some(&params)).expect("must build");
        assert_eq!(token_count(&url), 1);
        let token = url
            .query_pairs()
            .find(|(k, _)| k == TOKEN_PARAM)
            .map(|(_, v)| v.into_owned());
        assert_eq!(token.as_deref(), Some("real"));
    }

    #[test]
    fn caller_token_kept_when_client_unauthenticated() {
        let params = query([("token", "caller".to_owned())]);
        let url = build_url(&config(""), "/txs", Some(&params)).expect("must build");
        assert_eq!(token_count(&url), 1);
    }

    #[test]
    fn token_appears_exactly_once_for_many_param_sets() {
        let sets = [
            QueryParams::new(),
            query([("before", "187621".to_owned())]),
            query([("a", "1".to_owned()), ("b", "two words".to_owned())]),
            query([("token", "x".to_owned()), ("private", "true".to_owned())]),
        ];
        for params in &sets {
            let with = build_url(&config("abc"), "/addrs/x", Some(params)).expect("must build");
            assert_eq!(token_count(&with), 1, "params: {params:?}");
        }
    }

    #[test]
    fn params_round_trip_through_query_string() {
        let params = query([
            ("before", "187621".to_owned()),
            ("note", "a&b=c d;é".to_owned()),
            ("omitWalletAddresses", "true".to_owned()),
        ]);
        let url = build_url(&config(""), "/addrs/x", Some(&params)).expect("must build");
        let decoded: QueryParams = url.query_pairs().into_owned().collect();
        assert_eq!(decoded, params);
    }

    #[test]
    fn rejects_path_without_leading_slash() {
        let err = build_url(&config(""), "addrs/x", None).expect_err("must reject");
        assert!(matches!(err, BcyError::UrlConstruction(_)));
    }

    #[test]
    fn rejects_bad_coin_before_composition() {
        let cfg = ClientConfig::new("bt c", "main").with_base_url("https://api.example");
        let err = build_url(&cfg, "/txs", None).expect_err("must reject");
        assert!(err.to_string().contains("coin"));
    }

    #[test]
    fn rejects_unparseable_base() {
        let cfg = ClientConfig::new("btc", "main").with_base_url("not a url");
        let err = build_url(&cfg, "/txs", None).expect_err("must reject");
        assert!(matches!(err, BcyError::UrlConstruction(_)));
    }

    #[test]
    fn path_id_rejects_separators() {
        assert!(path_id("wallet name", "alice").is_ok());
        assert!(path_id("wallet name", "a;b").is_ok());
        assert!(path_id("wallet name", "").is_err());
        assert!(path_id("wallet name", "../x").is_err());
        assert!(path_id("wallet name", "a?b").is_err());
    }

    #[test]
    fn path_id_rejects_dot_segments_and_encoded_escapes() {
        for id in ["..", ".", "%2e%2e", "a\\..\\..\\x", "a%2Fb"] {
            let err = path_id("wallet name", id).expect_err("must reject");
            assert!(matches!(err, BcyError::UrlConstruction(_)), "id {id:?}");
        }
        assert!(path_id("wallet name", "a.b").is_ok());
        assert!(path_id("wallet name", "...").is_ok());
    }

    #[test]
    fn dot_coin_cannot_drop_version_prefix() {
        let cfg = ClientConfig::new("..", "main").with_base_url("https://api.example");
        let err = build_url(&cfg, "/txs", None).expect_err("must reject");
        assert!(err.to_string().contains("coin"));
    }
}

use reqwest::Url;

use crate::client::{path_id, query, BlockCypher, QueryParams};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::{Block, BlockId, Blockchain};

impl BlockCypher {
    /// Current state of the configured coin/chain.
    pub async fn get_chain(&self, ctx: &CallContext) -> Result<Blockchain, BcyError> {
        let target = self.url("", None)?;
        self.fetch(ctx, target).await
    }

    pub async fn get_block(
        &self,
        ctx: &CallContext,
        id: &BlockId,
        params: Option<&QueryParams>,
    ) -> Result<Block, BcyError> {
        let segment = id.to_string();
        let segment = path_id("block id", &segment)?;
        let target = self.url(&format!("/blocks/{segment}"), params)?;
        self.fetch(ctx, target).await
    }

    /// A block with the window of `limit` transaction hashes starting at
    /// `txstart`.
    pub async fn get_block_page(
        &self,
        ctx: &CallContext,
        id: &BlockId,
        txstart: u64,
        limit: u64,
    ) -> Result<Block, BcyError> {
        let params = query([
            ("txstart", txstart.to_string()),
            ("limit", limit.to_string()),
        ]);
        self.get_block(ctx, id, Some(&params)).await
    }

    /// The next window of transaction hashes of `block`, as advertised by its
    /// `next_txids` link.
    pub async fn get_block_next_txs(
        &self,
        ctx: &CallContext,
        block: &Block,
    ) -> Result<Block, BcyError> {
        if block.next_txids.is_empty() {
            return Err(BcyError::NoMorePages("get_block_next_txs"));
        }
        let (txstart, limit) = parse_next_txids(&block.next_txids)?;
        let id = BlockId::Hash(block.hash.clone());
        self.get_block_page(ctx, &id, txstart, limit).await
    }
}

/// Read `txstart` and `limit` from a block's `next_txids` URL. A missing
/// `limit` falls back to the number of hashes per page the service uses by
/// default.
fn parse_next_txids(next: &str) -> Result<(u64, u64), BcyError> {
    const DEFAULT_TX_LIMIT: u64 = 20;

    let url = Url::parse(next)
        .map_err(|e| BcyError::UrlConstruction(format!("invalid next_txids `{next}`: {e}")))?;
    let mut txstart = None;
    let mut limit = DEFAULT_TX_LIMIT;
    for (key, value) in url.query_pairs() {
        let parsed = || {
            value.parse::<u64>().map_err(|e| {
                BcyError::UrlConstruction(format!("invalid {key} `{value}` in next_txids: {e}"))
            })
        };
        match key.as_ref() {
            "txstart" => txstart = Some(parsed()?),
            "limit" => limit = parsed()?,
            _ => {}
        }
    }
    let txstart = txstart.ok_or_else(|| {
        BcyError::UrlConstruction(format!("next_txids `{next}` carries no txstart"))
    })?;
    Ok((txstart, limit))
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::test_util::{client_for, mock_server, request_count};

    #[test]
    fn parse_next_txids_reads_window() {
        let (start, limit) =
            parse_next_txids("https://api.blockcypher.com/v1/btc/main/blocks/00ab?txstart=20&limit=20")
                .expect("must parse");
        assert_eq!((start, limit), (20, 20));
    }

    #[test]
    fn parse_next_txids_requires_txstart() {
        assert!(parse_next_txids("https://api.blockcypher.com/v1/btc/main/blocks/00ab").is_err());
        assert!(parse_next_txids("not a url").is_err());
    }

    #[tokio::test]
    async fn get_chain_hits_chain_root() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/btc/main"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "BTC.main",
                "height": 360060,
                "peer_count": 239
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let chain = client
            .get_chain(&CallContext::background())
            .await
            .expect("chain must load");
        assert_eq!(chain.name, "BTC.main");
        assert_eq!(chain.height, 360060);
    }

    #[tokio::test]
    async fn get_block_by_height() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/btc/main/blocks/187621"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"height": 187621, "hash": "0000ffeb"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let block = client
            .get_block(&CallContext::background(), &BlockId::Height(187621), None)
            .await
            .expect("block must load");
        assert_eq!(block.hash, "0000ffeb");
    }

    #[tokio::test]
    async fn next_txs_follows_link_window() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/btc/main/blocks/0000cb69"))
            .and(query_param("txstart", "1"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hash": "0000cb69",
                "txids": ["bb"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let first = Block {
            hash: "0000cb69".into(),
            txids: vec!["aa".into()],
            next_txids: format!("{}/v1/btc/main/blocks/0000cb69?txstart=1&limit=1", server.uri()),
            ..Default::default()
        };
        let next = client
            .get_block_next_txs(&CallContext::background(), &first)
            .await
            .expect("next window must load");
        assert_eq!(next.txids, vec!["bb".to_owned()]);
    }

    #[tokio::test]
    async fn next_txs_without_link_issues_no_request() {
        let server = mock_server().await;
        let client = client_for(&server, "");
        let err = client
            .get_block_next_txs(&CallContext::background(), &Block::default())
            .await
            .expect_err("must report exhaustion");
        assert!(matches!(err, BcyError::NoMorePages(_)));
        assert_eq!(request_count(&server).await, 0);
    }
}

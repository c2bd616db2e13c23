use serde::Serialize;

use crate::client::{path_id, query, BlockCypher, QueryParams};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::{MicroTX, TXConf, TXSkel, TX};

/// Body shape shared by `/txs/push` and `/txs/decode`.
#[derive(Serialize)]
struct RawTx<'a> {
    tx: &'a str,
}

impl BlockCypher {
    /// Transactions currently in the service's mempool view.
    pub async fn get_unconfirmed_txs(&self, ctx: &CallContext) -> Result<Vec<TX>, BcyError> {
        let target = self.url("/txs", None)?;
        self.fetch(ctx, target).await
    }

    pub async fn get_tx(
        &self,
        ctx: &CallContext,
        hash: &str,
        params: Option<&QueryParams>,
    ) -> Result<TX, BcyError> {
        let hash = path_id("transaction hash", hash)?;
        let target = self.url(&format!("/txs/{hash}"), params)?;
        self.fetch(ctx, target).await
    }

    pub async fn get_tx_conf(&self, ctx: &CallContext, hash: &str) -> Result<TXConf, BcyError> {
        let hash = path_id("transaction hash", hash)?;
        let target = self.url(&format!("/txs/{hash}/confidence"), None)?;
        self.fetch(ctx, target).await
    }

    /// Ask the service to build an unsigned transaction from the inputs and
    /// outputs of `trans`. With `verify`, the skeleton also carries the raw
    /// transactions behind each `tosign` entry.
    pub async fn new_tx(
        &self,
        ctx: &CallContext,
        trans: &TX,
        verify: bool,
    ) -> Result<TXSkel, BcyError> {
        let params = verify.then(|| query([("includeToSignTx", "true".to_owned())]));
        let target = self.url("/txs/new", params.as_ref())?;
        self.create(ctx, target, Some(trans)).await
    }

    /// Submit a skeleton whose `signatures` and `pub_keys` have been filled.
    pub async fn send_tx(&self, ctx: &CallContext, skel: &TXSkel) -> Result<TXSkel, BcyError> {
        let target = self.url("/txs/send", None)?;
        self.create(ctx, target, Some(skel)).await
    }

    /// Broadcast a fully signed raw transaction given as hex.
    pub async fn push_tx(&self, ctx: &CallContext, hex: &str) -> Result<TXSkel, BcyError> {
        let target = self.url("/txs/push", None)?;
        self.create(ctx, target, Some(&RawTx { tx: hex })).await
    }

    /// Decode a raw transaction without broadcasting it.
    pub async fn decode_tx(&self, ctx: &CallContext, hex: &str) -> Result<TX, BcyError> {
        let target = self.url("/txs/decode", None)?;
        self.create(ctx, target, Some(&RawTx { tx: hex })).await
    }

    pub async fn send_micro(&self, ctx: &CallContext, micro: &MicroTX) -> Result<MicroTX, BcyError> {
        let target = self.url("/txs/micro", None)?;
        self.create(ctx, target, Some(micro)).await
    }
}

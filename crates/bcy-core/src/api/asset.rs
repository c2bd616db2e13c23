use crate::client::{path_id, BlockCypher};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::{Addr, AddrKeychain, OAPIssue, OAPTX};

impl BlockCypher {
    /// Key pair plus its Open Assets address (`oap_address`).
    pub async fn gen_asset_keychain(&self, ctx: &CallContext) -> Result<AddrKeychain, BcyError> {
        let target = self.url("/oap/addrs", None)?;
        self.create::<(), _>(ctx, target, None).await
    }

    /// Issue new units of an asset, paid for by the funded key in
    /// `issue.priv_key`.
    pub async fn issue_asset(&self, ctx: &CallContext, issue: &OAPIssue) -> Result<OAPTX, BcyError> {
        let target = self.url("/oap/issue", None)?;
        self.create(ctx, target, Some(issue)).await
    }

    pub async fn transfer_asset(
        &self,
        ctx: &CallContext,
        issue: &OAPIssue,
        asset_id: &str,
    ) -> Result<OAPTX, BcyError> {
        let asset_id = path_id("asset id", asset_id)?;
        let target = self.url(&format!("/oap/{asset_id}/transfer"), None)?;
        self.create(ctx, target, Some(issue)).await
    }

    /// Hashes of every transaction involving `asset_id`.
    pub async fn list_asset_txs(
        &self,
        ctx: &CallContext,
        asset_id: &str,
    ) -> Result<Vec<String>, BcyError> {
        let asset_id = path_id("asset id", asset_id)?;
        let target = self.url(&format!("/oap/{asset_id}/txs"), None)?;
        self.fetch(ctx, target).await
    }

    pub async fn get_asset_tx(
        &self,
        ctx: &CallContext,
        asset_id: &str,
        hash: &str,
    ) -> Result<OAPTX, BcyError> {
        let asset_id = path_id("asset id", asset_id)?;
        let hash = path_id("transaction hash", hash)?;
        let target = self.url(&format!("/oap/{asset_id}/txs/{hash}"), None)?;
        self.fetch(ctx, target).await
    }

    /// Asset holdings of an OAP address. Amounts in the returned [`Addr`]
    /// count asset units, not satoshis.
    pub async fn get_asset_addr(
        &self,
        ctx: &CallContext,
        asset_id: &str,
        oap_addr: &str,
    ) -> Result<Addr, BcyError> {
        let asset_id = path_id("asset id", asset_id)?;
        let oap_addr = path_id("OAP address", oap_addr)?;
        let target = self.url(&format!("/oap/{asset_id}/addrs/{oap_addr}"), None)?;
        self.fetch(ctx, target).await
    }
}

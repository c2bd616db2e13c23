use serde::Deserialize;

use crate::client::{path_id, query, BlockCypher};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::{AddressFilter, HDWallet};

use super::wallet::filter_params;

impl BlockCypher {
    /// Create an HD wallet watching the addresses derived from
    /// `req.ext_pub_key`.
    pub async fn create_hd_wallet(
        &self,
        ctx: &CallContext,
        req: &HDWallet,
    ) -> Result<HDWallet, BcyError> {
        let target = self.url("/wallets/hd", None)?;
        self.create(ctx, target, Some(req)).await
    }

    pub async fn list_hd_wallets(&self, ctx: &CallContext) -> Result<Vec<String>, BcyError> {
        #[derive(Deserialize)]
        struct HdWalletNames {
            #[serde(default)]
            hd_wallet_names: Vec<String>,
        }

        let target = self.url("/wallets/hd", None)?;
        let names: HdWalletNames = self.fetch(ctx, target).await?;
        Ok(names.hd_wallet_names)
    }

    pub async fn get_hd_wallet(&self, ctx: &CallContext, name: &str) -> Result<HDWallet, BcyError> {
        let name = path_id("wallet name", name)?;
        let target = self.url(&format!("/wallets/hd/{name}"), None)?;
        self.fetch(ctx, target).await
    }

    /// Addresses of the HD wallet grouped by chain, narrowed by `filter`.
    pub async fn get_addr_hd_wallet(
        &self,
        ctx: &CallContext,
        name: &str,
        filter: AddressFilter,
    ) -> Result<HDWallet, BcyError> {
        let name = path_id("wallet name", name)?;
        let params = filter_params(filter);
        let target = self.url(&format!("/wallets/hd/{name}/addresses"), Some(&params))?;
        self.fetch(ctx, target).await
    }

    /// Derive `count` new addresses. Without `subchain_index` they land on
    /// the wallet's first chain. The result only holds the new addresses.
    pub async fn derive_addr_hd_wallet(
        &self,
        ctx: &CallContext,
        name: &str,
        count: u32,
        subchain_index: Option<i64>,
    ) -> Result<HDWallet, BcyError> {
        let name = path_id("wallet name", name)?;
        let mut params = query([("count", count.to_string())]);
        if let Some(index) = subchain_index {
            params.insert("subchain_index".to_owned(), index.to_string());
        }
        let target = self.url(&format!("/wallets/hd/{name}/addresses/derive"), Some(&params))?;
        self.create::<(), _>(ctx, target, None).await
    }

    pub async fn delete_hd_wallet(&self, ctx: &CallContext, name: &str) -> Result<(), BcyError> {
        let name = path_id("wallet name", name)?;
        let target = self.url(&format!("/wallets/hd/{name}"), None)?;
        self.remove(ctx, target).await
    }
}

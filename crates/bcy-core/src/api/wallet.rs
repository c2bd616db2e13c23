use serde::Deserialize;

use crate::client::{path_id, query, BlockCypher, QueryParams};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::{AddrKeychain, AddressFilter, Wallet};

/// Query parameters for an address listing filter.
pub(crate) fn filter_params(filter: AddressFilter) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(used) = filter.used {
        params.insert("used".to_owned(), used.to_string());
    }
    if let Some(zero) = filter.zero_balance {
        params.insert("zerobalance".to_owned(), zero.to_string());
    }
    params
}

impl BlockCypher {
    /// Create a named address-watching wallet. The wallet name can then be
    /// used wherever an address is accepted.
    pub async fn create_wallet(&self, ctx: &CallContext, req: &Wallet) -> Result<Wallet, BcyError> {
        let target = self.url("/wallets", None)?;
        self.create(ctx, target, Some(req)).await
    }

    pub async fn list_wallets(&self, ctx: &CallContext) -> Result<Vec<String>, BcyError> {
        #[derive(Deserialize)]
        struct WalletNames {
            #[serde(default)]
            wallet_names: Vec<String>,
        }

        let target = self.url("/wallets", None)?;
        let names: WalletNames = self.fetch(ctx, target).await?;
        Ok(names.wallet_names)
    }

    pub async fn get_wallet(&self, ctx: &CallContext, name: &str) -> Result<Wallet, BcyError> {
        let name = path_id("wallet name", name)?;
        let target = self.url(&format!("/wallets/{name}"), None)?;
        self.fetch(ctx, target).await
    }

    /// Add `addrs` to the wallet. With `omit_addresses` the response leaves
    /// the address list out, which keeps large wallets cheap.
    pub async fn add_addr_wallet(
        &self,
        ctx: &CallContext,
        name: &str,
        addrs: &[String],
        omit_addresses: bool,
    ) -> Result<Wallet, BcyError> {
        let name = path_id("wallet name", name)?;
        let params = query([("omitWalletAddresses", omit_addresses.to_string())]);
        let target = self.url(&format!("/wallets/{name}/addresses"), Some(&params))?;
        let body = Wallet {
            addresses: addrs.to_vec(),
            ..Default::default()
        };
        self.create(ctx, target, Some(&body)).await
    }

    pub async fn get_addr_wallet(
        &self,
        ctx: &CallContext,
        name: &str,
        filter: AddressFilter,
    ) -> Result<Vec<String>, BcyError> {
        let name = path_id("wallet name", name)?;
        let params = filter_params(filter);
        let target = self.url(&format!("/wallets/{name}/addresses"), Some(&params))?;
        let wallet: Wallet = self.fetch(ctx, target).await?;
        Ok(wallet.addresses)
    }

    pub async fn delete_addr_wallet(
        &self,
        ctx: &CallContext,
        name: &str,
        addrs: &[String],
    ) -> Result<(), BcyError> {
        let name = path_id("wallet name", name)?;
        let params = query([("address", addrs.join(";"))]);
        let target = self.url(&format!("/wallets/{name}/addresses"), Some(&params))?;
        self.remove(ctx, target).await
    }

    /// Generate a new address inside the wallet. The response holds both the
    /// updated wallet and the new key pair in one flat object; it is decoded
    /// once and then split into the two shapes.
    pub async fn gen_addr_wallet(
        &self,
        ctx: &CallContext,
        name: &str,
    ) -> Result<(Wallet, AddrKeychain), BcyError> {
        let name = path_id("wallet name", name)?;
        let target = self.url(&format!("/wallets/{name}/addresses/generate"), None)?;
        let flat: serde_json::Value = self.create::<(), _>(ctx, target, None).await?;
        let wallet = Wallet::deserialize(&flat).map_err(BcyError::Decode)?;
        let keychain = AddrKeychain::deserialize(&flat).map_err(BcyError::Decode)?;
        Ok((wallet, keychain))
    }

    pub async fn delete_wallet(&self, ctx: &CallContext, name: &str) -> Result<(), BcyError> {
        let name = path_id("wallet name", name)?;
        let target = self.url(&format!("/wallets/{name}"), None)?;
        self.remove(ctx, target).await
    }
}

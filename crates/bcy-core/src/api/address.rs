use serde::{Deserialize, Serialize};

use crate::client::{path_id, query, BlockCypher, QueryParams};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::pagination::next_page_params;
use crate::types::{Addr, AddrKeychain};

/// Coin/chain pairs on which the faucet is available.
const FAUCET_CHAINS: &[(&str, &str)] = &[("bcy", "test"), ("btc", "test3")];

impl BlockCypher {
    /// Balance summary of one address, without transaction references.
    pub async fn get_addr_bal(
        &self,
        ctx: &CallContext,
        hash: &str,
        params: Option<&QueryParams>,
    ) -> Result<Addr, BcyError> {
        let hash = path_id("address", hash)?;
        let target = self.url(&format!("/addrs/{hash}/balance"), params)?;
        self.fetch(ctx, target).await
    }

    /// Balances of several addresses in one request.
    ///
    /// An empty `hashes` slice returns an empty list without a request. The
    /// service answers a single address with an object and several with an
    /// array; both come back as a list.
    pub async fn get_multi_addr_bal(
        &self,
        ctx: &CallContext,
        hashes: &[&str],
        omit_wallet_addresses: bool,
    ) -> Result<Vec<Addr>, BcyError> {
        if hashes.is_empty() {
            return Ok(Vec::new());
        }
        for hash in hashes {
            path_id("address", hash)?;
        }
        let params = query([("omitWalletAddresses", omit_wallet_addresses.to_string())]);
        let joined = hashes.join(";");
        let target = self.url(&format!("/addrs/{joined}/balance"), Some(&params))?;
        if hashes.len() == 1 {
            let addr: Addr = self.fetch(ctx, target).await?;
            Ok(vec![addr])
        } else {
            self.fetch(ctx, target).await
        }
    }

    /// Address state with a page of transaction references (`txrefs`).
    pub async fn get_addr(
        &self,
        ctx: &CallContext,
        hash: &str,
        params: Option<&QueryParams>,
    ) -> Result<Addr, BcyError> {
        let hash = path_id("address", hash)?;
        let target = self.url(&format!("/addrs/{hash}"), params)?;
        self.fetch(ctx, target).await
    }

    /// The page of `txrefs` following `page`, using the block height of its
    /// last reference as the cursor.
    pub async fn get_addr_next(&self, ctx: &CallContext, page: &Addr) -> Result<Addr, BcyError> {
        let last = page.txrefs.last().map(|txref| txref.block_height);
        let params = next_page_params("get_addr_next", page.has_more, last)?;
        self.get_addr(ctx, &page.address, Some(&params)).await
    }

    /// Address state with a page of full transactions (`txs`).
    pub async fn get_addr_full(
        &self,
        ctx: &CallContext,
        hash: &str,
        params: Option<&QueryParams>,
    ) -> Result<Addr, BcyError> {
        let hash = path_id("address", hash)?;
        let target = self.url(&format!("/addrs/{hash}/full"), params)?;
        self.fetch(ctx, target).await
    }

    /// The page of `txs` following `page`.
    pub async fn get_addr_full_next(
        &self,
        ctx: &CallContext,
        page: &Addr,
    ) -> Result<Addr, BcyError> {
        let last = page.txs.last().map(|tx| tx.block_height);
        let params = next_page_params("get_addr_full_next", page.has_more, last)?;
        self.get_addr_full(ctx, &page.address, Some(&params)).await
    }

    /// Generate a fresh key pair and address on this coin/chain.
    pub async fn gen_addr_keychain(&self, ctx: &CallContext) -> Result<AddrKeychain, BcyError> {
        let target = self.url("/addrs", None)?;
        self.create::<(), _>(ctx, target, None).await
    }

    /// Generate a P2SH multisig address from `multi.pub_keys` and a
    /// `multisig-n-of-m` script type. Other fields are ignored by the service.
    pub async fn gen_addr_multisig(
        &self,
        ctx: &CallContext,
        multi: &AddrKeychain,
    ) -> Result<AddrKeychain, BcyError> {
        if multi.pub_keys.is_empty() || multi.script_type.is_empty() {
            return Err(BcyError::InvalidArgument(
                "multisig generation needs both pubkeys and script_type".to_owned(),
            ));
        }
        let target = self.url("/addrs", None)?;
        self.create(ctx, target, Some(multi)).await
    }

    /// Fund `keychain` with `amount` satoshis from the test faucet and return
    /// the funding transaction hash. Only available on `bcy/test` and
    /// `btc/test3`.
    pub async fn faucet(
        &self,
        ctx: &CallContext,
        keychain: &AddrKeychain,
        amount: i64,
    ) -> Result<String, BcyError> {
        #[derive(Serialize)]
        struct FaucetRequest<'a> {
            address: &'a str,
            amount: i64,
        }

        #[derive(Deserialize)]
        struct FaucetResponse {
            #[serde(default)]
            tx_ref: String,
        }

        let config = self.config();
        let allowed = FAUCET_CHAINS
            .iter()
            .any(|(coin, chain)| config.coin == *coin && config.chain == *chain);
        if !allowed {
            return Err(BcyError::InvalidArgument(format!(
                "faucet is only available on bcy/test or btc/test3, not {}/{}",
                config.coin, config.chain
            )));
        }

        // OAP keychains are funded through their underlying address.
        let address = if keychain.original_address.is_empty() {
            &keychain.address
        } else {
            &keychain.original_address
        };
        let target = self.url("/faucet", None)?;
        let response: FaucetResponse = self
            .create(ctx, target, Some(&FaucetRequest { address, amount }))
            .await?;
        Ok(response.tx_ref)
    }
}

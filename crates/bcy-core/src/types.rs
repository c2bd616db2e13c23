//! Payload shapes exchanged with the BlockCypher API.
//!
//! Every shape derives `Default` and is decoded with `#[serde(default)]`:
//! fields absent from a response keep their zero value and unknown fields
//! are ignored. String, list and nested fields also accept an explicit
//! `null` as their zero value. Optional request fields are skipped when
//! empty so that request bodies only carry what the caller set.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Treat an explicit `null` like an absent field: keep the zero value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ==============================================================================
// Blockchain & Blocks
// ==============================================================================

/// Summary of a coin/chain, from the chain root endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blockchain {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub height: i64,
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_default")]
    pub time: String,
    #[serde(deserialize_with = "null_default")]
    pub latest_url: String,
    #[serde(deserialize_with = "null_default")]
    pub previous_hash: String,
    #[serde(deserialize_with = "null_default")]
    pub previous_url: String,
    pub peer_count: i64,
    pub unconfirmed_count: i64,
    pub high_fee_per_kb: i64,
    pub medium_fee_per_kb: i64,
    pub low_fee_per_kb: i64,
    pub last_fork_height: i64,
    #[serde(deserialize_with = "null_default")]
    pub last_fork_hash: String,
}

/// A block with one page of its transaction hashes.
///
/// `next_txids` holds the URL of the following page when the block has more
/// transactions than fit in `txids`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    pub height: i64,
    pub depth: i64,
    #[serde(deserialize_with = "null_default")]
    pub chain: String,
    pub total: i64,
    pub fees: i64,
    pub ver: i64,
    #[serde(deserialize_with = "null_default")]
    pub time: String,
    #[serde(deserialize_with = "null_default")]
    pub received_time: String,
    pub bits: i64,
    pub nonce: i64,
    pub n_tx: i64,
    #[serde(deserialize_with = "null_default")]
    pub prev_block: String,
    #[serde(deserialize_with = "null_default")]
    pub mrkl_root: String,
    #[serde(deserialize_with = "null_default")]
    pub txids: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub next_txids: String,
    #[serde(deserialize_with = "null_default")]
    pub prev_block_url: String,
    #[serde(deserialize_with = "null_default")]
    pub tx_url: String,
}

/// Which block to request: by height or by hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockId {
    Height(u64),
    Hash(String),
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Height(height) => write!(f, "{height}"),
            Self::Hash(hash) => f.write_str(hash),
        }
    }
}

impl From<u64> for BlockId {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

impl From<&str> for BlockId {
    fn from(hash: &str) -> Self {
        Self::Hash(hash.to_owned())
    }
}

// ==============================================================================
// Transactions
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TX {
    #[serde(skip_serializing_if = "is_zero")]
    pub block_height: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub addresses: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub total: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub fees: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub size: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub preference: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub relayed_by: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub received: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub confirmed: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub confirmations: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub ver: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub lock_time: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub vin_sz: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub vout_sz: i64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub double_spend: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub double_spend_tx: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub hex: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub data_protocol: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub next_inputs: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub next_outputs: String,
    #[serde(deserialize_with = "null_default")]
    pub inputs: Vec<TXInput>,
    #[serde(deserialize_with = "null_default")]
    pub outputs: Vec<TXOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TXInput {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub prev_hash: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub output_index: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub output_value: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub addresses: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub sequence: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub script_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub script: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub age: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub wallet_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TXOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub spent_by: String,
    pub value: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub addresses: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub script_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub script: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub data_hex: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub data_string: String,
}

/// Zero-confirmation confidence for an unconfirmed transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TXConf {
    pub age_millis: i64,
    pub receive_count: i64,
    pub confidence: f64,
    #[serde(rename = "txhash")]
    #[serde(deserialize_with = "null_default")]
    pub tx_hash: String,
}

/// An unsigned transaction returned by `/txs/new`, with the data each input
/// must sign. Signing is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TXSkel {
    #[serde(rename = "tx")]
    #[serde(deserialize_with = "null_default")]
    pub trans: TX,
    #[serde(rename = "tosign", skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub to_sign: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub signatures: Vec<String>,
    #[serde(rename = "pubkeys", skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub pub_keys: Vec<String>,
    #[serde(rename = "tosign_tx", skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub to_sign_tx: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub errors: Vec<ServiceErrorEntry>,
}

/// One entry of the `errors` array some endpoints attach to a result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceErrorEntry {
    #[serde(deserialize_with = "null_default")]
    pub error: String,
}

/// Microtransaction request/response, for small transfers sent through
/// `/txs/micro`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicroTX {
    #[serde(rename = "from_private", skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub priv_key: String,
    #[serde(rename = "from_pubkey", skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub pubkey: String,
    #[serde(rename = "from_wif", skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub wif: String,
    #[serde(rename = "to_address", skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub to_addr: String,
    #[serde(rename = "value_satoshis")]
    pub value: i64,
    #[serde(rename = "change_address", skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub change_addr: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub wait_guarantee: i64,
    #[serde(rename = "tosign", skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub to_sign: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub signatures: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub inputs: Vec<TXInput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub outputs: Vec<TXOutput>,
    #[serde(skip_serializing_if = "is_zero")]
    pub fees: i64,
}

// ==============================================================================
// Addresses
// ==============================================================================

/// Address (or wallet) state. Which of `txrefs`/`txs` is populated depends on
/// the endpoint; `has_more` marks that older entries exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Addr {
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(deserialize_with = "null_default")]
    pub wallet: Wallet,
    #[serde(deserialize_with = "null_default")]
    pub hd_wallet: HDWallet,
    pub total_received: i64,
    pub total_sent: i64,
    pub balance: i64,
    pub unconfirmed_balance: i64,
    pub final_balance: i64,
    pub n_tx: i64,
    pub unconfirmed_n_tx: i64,
    pub final_n_tx: i64,
    #[serde(deserialize_with = "null_default")]
    pub txrefs: Vec<TXRef>,
    #[serde(deserialize_with = "null_default")]
    pub unconfirmed_txrefs: Vec<TXRef>,
    #[serde(deserialize_with = "null_default")]
    pub txs: Vec<TX>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// A single input or output of a transaction touching an address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TXRef {
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    pub block_height: i64,
    #[serde(deserialize_with = "null_default")]
    pub tx_hash: String,
    pub tx_input_n: i64,
    pub tx_output_n: i64,
    pub value: i64,
    #[serde(deserialize_with = "null_default")]
    pub pref: String,
    pub spent: bool,
    pub double_spend: bool,
    pub confirmations: i64,
    pub ref_balance: i64,
    pub confidence: f64,
    #[serde(deserialize_with = "null_default")]
    pub confirmed: String,
    #[serde(deserialize_with = "null_default")]
    pub spent_by: String,
    #[serde(deserialize_with = "null_default")]
    pub received: String,
    pub receive_count: i64,
}

/// Generated key material for an address. Also used as the request shape
/// for multisig address generation (`pubkeys` + `script_type`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddrKeychain {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub private: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub public: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub wif: String,
    #[serde(rename = "pubkeys", skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub pub_keys: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub script_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub original_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub oap_address: String,
}

// ==============================================================================
// Wallets
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HDWallet {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "extended_public_key", skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub ext_pub_key: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub subchain_indexes: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub chains: Vec<HDChain>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HDChain {
    #[serde(deserialize_with = "null_default")]
    pub chain_addresses: Vec<HDAddress>,
    pub index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HDAddress {
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub public: String,
}

/// Address filter for wallet address listings. `None` leaves the dimension
/// unfiltered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressFilter {
    /// `Some(true)` only used addresses, `Some(false)` only unused ones.
    pub used: Option<bool>,
    /// `Some(true)` only zero-balance addresses, `Some(false)` only funded ones.
    pub zero_balance: Option<bool>,
}

// ==============================================================================
// Hooks & Payment Forwarding
// ==============================================================================

/// WebHook subscription. `id` is assigned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub event: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub wallet_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub confirmations: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub confidence: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub script: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub callback_errors: i64,
}

/// Payment forwarding request. `id`, `input_address` and `txs` are filled in
/// by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayFwd {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub destination: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub input_address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub process_fees_address: String,
    #[serde(rename = "process_fees_satoshis", skip_serializing_if = "is_zero")]
    pub process_fees_value: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub process_fees_percent: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub callback_url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enable_confirmations: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub mining_fees_satoshis: i64,
    #[serde(rename = "transactions", skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub txs: Vec<String>,
}

// ==============================================================================
// Metadata
// ==============================================================================

/// The kind of blockchain object metadata is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKind {
    Addr,
    Tx,
    Block,
}

impl MetaKind {
    /// Path segment for this kind (`addrs`, `txs`, `blocks`).
    pub fn collection(self) -> &'static str {
        match self {
            Self::Addr => "addrs",
            Self::Tx => "txs",
            Self::Block => "blocks",
        }
    }
}

impl std::fmt::Display for MetaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Addr => write!(f, "addr"),
            Self::Tx => write!(f, "tx"),
            Self::Block => write!(f, "block"),
        }
    }
}

impl std::str::FromStr for MetaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addr" => Ok(Self::Addr),
            "tx" => Ok(Self::Tx),
            "block" => Ok(Self::Block),
            other => Err(format!(
                "invalid metadata kind `{other}`; expected addr, tx, or block"
            )),
        }
    }
}

/// Key-value metadata attached to an address, transaction, or block.
pub type Meta = HashMap<String, String>;

// ==============================================================================
// Assets (Open Assets Protocol)
// ==============================================================================

/// Issue or transfer request for an Open Assets asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAPIssue {
    #[serde(rename = "from_private")]
    #[serde(deserialize_with = "null_default")]
    pub priv_key: String,
    #[serde(rename = "to_address")]
    #[serde(deserialize_with = "null_default")]
    pub to_addr: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_default")]
    pub metadata: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAPTX {
    pub ver: i64,
    #[serde(rename = "assetid")]
    #[serde(deserialize_with = "null_default")]
    pub asset_id: String,
    #[serde(deserialize_with = "null_default")]
    pub hash: String,
    #[serde(deserialize_with = "null_default")]
    pub confirmed: String,
    #[serde(deserialize_with = "null_default")]
    pub received: String,
    #[serde(rename = "oap_meta")]
    #[serde(deserialize_with = "null_default")]
    pub metadata: String,
    pub double_spend: bool,
    #[serde(deserialize_with = "null_default")]
    pub inputs: Vec<OAPInput>,
    #[serde(deserialize_with = "null_default")]
    pub outputs: Vec<OAPOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAPInput {
    #[serde(deserialize_with = "null_default")]
    pub prev_hash: String,
    pub output_index: i64,
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    pub output_value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAPOutput {
    #[serde(deserialize_with = "null_default")]
    pub address: String,
    pub value: i64,
    pub original_output_index: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_decodes_partial_body() {
        let addr: Addr = serde_json::from_value(serde_json::json!({
            "address": "1A2b",
            "balance": 4433416,
            "hasMore": true,
            "txrefs": [{"tx_hash": "aa", "block_height": 187621}],
            "unknown_field": {"nested": true}
        }))
        .expect("partial addr must decode");
        assert_eq!(addr.address, "1A2b");
        assert_eq!(addr.balance, 4433416);
        assert!(addr.has_more);
        assert_eq!(addr.txrefs[0].block_height, 187621);
        assert!(addr.txs.is_empty());
        assert_eq!(addr.wallet, Wallet::default());
    }

    #[test]
    fn null_fields_decode_as_zero_values() {
        let addr: Addr = serde_json::from_str(
            r#"{"address":"1A","txrefs":null,"wallet":null,"txs":[{"hash":"aa","inputs":null,"addresses":null}]}"#,
        )
        .expect("null lists must decode");
        assert_eq!(addr.address, "1A");
        assert!(addr.txrefs.is_empty());
        assert_eq!(addr.wallet, Wallet::default());
        assert!(addr.txs[0].inputs.is_empty());

        let chain: Blockchain =
            serde_json::from_str(r#"{"name":"BTC.main","height":5,"last_fork_hash":null}"#)
                .expect("null string must decode");
        assert_eq!(chain.height, 5);
        assert!(chain.last_fork_hash.is_empty());

        let block: Block = serde_json::from_str(r#"{"hash":"00ab","txids":null,"next_txids":null}"#)
            .expect("null block fields must decode");
        assert!(block.txids.is_empty());
        assert!(block.next_txids.is_empty());
    }

    #[test]
    fn empty_request_fields_are_not_serialized() {
        let hook = Hook {
            event: "new-block".into(),
            url: "https://example.com/cb".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&hook).expect("hook must serialize");
        assert_eq!(
            value,
            serde_json::json!({"event": "new-block", "url": "https://example.com/cb"})
        );
    }

    #[test]
    fn meta_kind_parses_and_maps_collection() {
        assert_eq!("tx".parse::<MetaKind>(), Ok(MetaKind::Tx));
        assert_eq!(MetaKind::Addr.collection(), "addrs");
        assert_eq!(MetaKind::Block.to_string(), "block");
        assert!("wallet".parse::<MetaKind>().is_err());
    }

    #[test]
    fn block_id_renders_path_segment() {
        assert_eq!(BlockId::from(187621).to_string(), "187621");
        assert_eq!(BlockId::from("00000abc").to_string(), "00000abc");
    }
}

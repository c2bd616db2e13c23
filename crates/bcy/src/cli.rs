use clap::{Parser, Subcommand};

use bcy_core::types::{BlockId, MetaKind};

/// bcy: query the BlockCypher REST API from the command line.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// API token, appended to every request when set.
    #[arg(long, env = "BCY_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Coin segment of the request path (btc, ltc, doge, dash, bcy, eth).
    #[arg(long, default_value = "btc", env = "BCY_COIN")]
    pub coin: String,

    /// Chain segment of the request path (main, test3, test).
    #[arg(long, default_value = "main", env = "BCY_CHAIN")]
    pub chain: String,

    /// Service root; override to target a mirror or local mock.
    #[arg(long, default_value = bcy_core::config::DEFAULT_BASE_URL, env = "BCY_BASE_URL")]
    pub base_url: String,

    /// Deadline for the whole command, in seconds.
    #[arg(long, default_value = "30", env = "BCY_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chain summary: height, latest hash, fee estimates.
    Chain,

    /// A block by height or hash.
    Block {
        #[arg(value_parser = parse_block_id)]
        id: BlockId,

        /// Index of the first transaction hash to return.
        #[arg(long, requires = "limit")]
        txstart: Option<u64>,

        /// Number of transaction hashes to return.
        #[arg(long, requires = "txstart")]
        limit: Option<u64>,
    },

    /// Address state with its transaction references.
    Addr {
        hash: String,

        /// Return full transactions instead of references.
        #[arg(long)]
        full: bool,

        /// Maximum number of pages to follow.
        #[arg(long, default_value = "1")]
        pages: u32,
    },

    /// Balances for one or more addresses in a single request.
    Balance {
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// A transaction by hash.
    Tx { hash: String },

    /// Zero-confirmation confidence for an unconfirmed transaction.
    TxConf { hash: String },

    /// Names of the wallets owned by the token.
    Wallets,

    /// Names of the HD wallets owned by the token.
    HdWallets,

    /// WebHooks registered by the token.
    Hooks,

    /// Payment forwards registered by the token.
    Payfwds,

    /// Metadata attached to an address, transaction, or block.
    Meta {
        hash: String,

        /// Object kind: addr, tx, or block.
        #[arg(long, default_value = "addr")]
        kind: MetaKind,

        /// Read the token-scoped store instead of the public one.
        #[arg(long)]
        private: bool,
    },
}

/// Strings that fit a `u64` are heights; anything else is a block hash.
fn parse_block_id(raw: &str) -> Result<BlockId, String> {
    if raw.is_empty() {
        return Err("block id must not be empty".into());
    }
    Ok(raw
        .parse::<u64>()
        .map(BlockId::Height)
        .unwrap_or_else(|_| BlockId::Hash(raw.to_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_id_parses_height_or_hash() {
        assert_eq!(parse_block_id("187621"), Ok(BlockId::Height(187621)));
        assert_eq!(
            parse_block_id("00000000abc"),
            Ok(BlockId::Hash("00000000abc".into()))
        );
        assert!(parse_block_id("").is_err());
    }

    #[test]
    fn cli_parses_global_options_and_subcommand() {
        let cli = Cli::try_parse_from([
            "bcy", "--coin", "ltc", "--chain", "main", "--token", "t", "meta", "abc", "--kind",
            "tx", "--private",
        ])
        .expect("arguments must parse");
        assert_eq!(cli.coin, "ltc");
        assert_eq!(cli.token, "t");
        match cli.command {
            Command::Meta {
                hash,
                kind,
                private,
            } => {
                assert_eq!(hash, "abc");
                assert_eq!(kind, MetaKind::Tx);
                assert!(private);
            }
            _ => panic!("expected meta subcommand"),
        }
    }

    #[test]
    fn block_paging_flags_come_together() {
        assert!(Cli::try_parse_from(["bcy", "block", "100", "--txstart", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["bcy", "block", "100", "--txstart", "1", "--limit", "5"]).is_ok()
        );
    }
}

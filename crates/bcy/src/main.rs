mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use bcy_core::types::Addr;
use bcy_core::{query, BcyError, BlockCypher, CallContext, ClientConfig};

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = ClientConfig::new(&args.coin, &args.chain)
        .with_token(&args.token)
        .with_base_url(&args.base_url);
    let client = BlockCypher::new(config).context("build API client")?;

    if !client.config().is_authenticated() {
        tracing::debug!("no API token configured; requests are rate-limited");
    }

    // Ctrl-C cancels whatever call is in flight.
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted; canceling request");
                cancel.cancel();
            }
        }
    });
    let ctx = CallContext::background()
        .with_cancel(cancel)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let report = |err: BcyError| {
        let message = format_api_error(&args.base_url, &err);
        eyre!(message).wrap_err(format!("request to {}/{} failed", args.coin, args.chain))
    };
    run(&client, &ctx, args.command, report).await
}

async fn run(
    client: &BlockCypher,
    ctx: &CallContext,
    command: Command,
    api: impl Fn(BcyError) -> eyre::Report + Copy,
) -> eyre::Result<()> {
    match command {
        Command::Chain => print_json(&client.get_chain(ctx).await.map_err(api)?),
        Command::Block { id, txstart, limit } => {
            let block = match (txstart, limit) {
                (Some(txstart), Some(limit)) => {
                    client.get_block_page(ctx, &id, txstart, limit).await.map_err(api)?
                }
                _ => client.get_block(ctx, &id, None).await.map_err(api)?,
            };
            print_json(&block)
        }
        Command::Addr { hash, full, pages } => {
            let pages = fetch_addr_pages(client, ctx, &hash, full, pages).await.map_err(api)?;
            print_json(&pages)
        }
        Command::Balance { hashes } => {
            let hashes: Vec<&str> = hashes.iter().map(String::as_str).collect();
            print_json(&client.get_multi_addr_bal(ctx, &hashes, false).await.map_err(api)?)
        }
        Command::Tx { hash } => print_json(&client.get_tx(ctx, &hash, None).await.map_err(api)?),
        Command::TxConf { hash } => print_json(&client.get_tx_conf(ctx, &hash).await.map_err(api)?),
        Command::Wallets => print_json(&client.list_wallets(ctx).await.map_err(api)?),
        Command::HdWallets => print_json(&client.list_hd_wallets(ctx).await.map_err(api)?),
        Command::Hooks => print_json(&client.list_hooks(ctx).await.map_err(api)?),
        Command::Payfwds => print_json(&client.list_payfwds(ctx).await.map_err(api)?),
        Command::Meta {
            hash,
            kind,
            private,
        } => print_json(&client.get_meta(ctx, &hash, kind, private).await.map_err(api)?),
    }
}

/// Follow the `before` cursor until `max_pages` pages are collected or the
/// service reports no older entries.
async fn fetch_addr_pages(
    client: &BlockCypher,
    ctx: &CallContext,
    hash: &str,
    full: bool,
    max_pages: u32,
) -> Result<Vec<Addr>, BcyError> {
    let first = if full {
        client.get_addr_full(ctx, hash, None).await?
    } else {
        client.get_addr(ctx, hash, None).await?
    };
    let mut pages = vec![first];

    while pages.len() < max_pages as usize {
        let Some(last) = pages.last() else { break };
        let next = if full {
            client.get_addr_full_next(ctx, last).await
        } else {
            client.get_addr_next(ctx, last).await
        };
        match next {
            Ok(page) => pages.push(page),
            Err(BcyError::NoMorePages(_)) => break,
            Err(err) => return Err(err),
        }
        tracing::debug!(pages = pages.len(), "fetched address page");
    }
    Ok(pages)
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let rendered = serde_json::to_string_pretty(value).wrap_err("render JSON output")?;
    println!("{rendered}");
    Ok(())
}

fn format_api_error(base_url: &str, err: &BcyError) -> String {
    let mut lines = vec![format!("API error: {err}")];

    match err {
        BcyError::Service { status, .. } if status.as_u16() == 401 || status.as_u16() == 403 => {
            lines.push("hint: authentication failed; verify --token or BCY_TOKEN".into());
        }
        BcyError::Service { status, .. } if status.as_u16() == 429 => {
            lines.push(
                "hint: rate limit reached; pass an API token or slow down requests".into(),
            );
        }
        BcyError::Service { status, .. } if status.as_u16() == 404 => {
            lines.push(
                "hint: resource not found; verify the hash and the --coin/--chain pair".into(),
            );
        }
        BcyError::Transport(source) => {
            let source = source.to_string();
            if source.contains("dns error") {
                lines.push(format!(
                    "hint: hostname resolution failed for `{base_url}`; verify the base URL and your network"
                ));
            } else if source.contains("certificate") || source.contains("tls") {
                lines.push("hint: TLS handshake failed; verify certificate trust".into());
            } else {
                lines.push(format!("hint: could not reach `{base_url}`"));
            }
        }
        BcyError::DeadlineExceeded => {
            lines.push("hint: raise --timeout-secs for slow endpoints".into());
        }
        _ => {}
    }

    lines.join("\n")
}

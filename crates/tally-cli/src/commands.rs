use anyhow::Context;
use colored::Colorize;
use serde::Deserialize;

use tally_chain::{Block, Chain};
use tally_server::{LedgerServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Verify(args) => cmd_verify(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = match args.port {
        Some(port) => ServerConfig::with_port(port),
        None => ServerConfig::from_env()?,
    };
    println!("tally ledger on {}", config.bind_addr.to_string().bold());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(LedgerServer::new(config).serve())?;
    Ok(())
}

/// Accepted shapes for `tally verify`: a bare block array, or the document
/// `GET /chain` returns.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChainDump {
    Blocks(Vec<Block>),
    Document { chain: Vec<Block> },
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.path)
        .with_context(|| format!("cannot read {}", args.path))?;
    let dump: ChainDump =
        serde_json::from_str(&raw).with_context(|| format!("cannot parse {}", args.path))?;
    let blocks = match dump {
        ChainDump::Blocks(blocks) | ChainDump::Document { chain: blocks } => blocks,
    };

    let chain = Chain::from_blocks(blocks)?;
    match chain.verify() {
        Ok(()) => {
            println!(
                "{} {} blocks, chain intact",
                "✓".green().bold(),
                chain.len().to_string().bold()
            );
            Ok(())
        }
        Err(violation) => {
            println!("{} {}", "✗".red().bold(), violation);
            anyhow::bail!("chain verification failed")
        }
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let mut chain = Chain::new();
    for i in 1..=args.count {
        chain.append_now(format!("entry-{i}"))?;
    }

    for block in chain.blocks() {
        println!(
            "  #{:<4} {}  ← {}  {}",
            block.index(),
            block.hash().short_hex().cyan(),
            block.previous_hash().short_hex(),
            block.data(),
        );
    }
    let verdict = if chain.is_valid() {
        "✓ valid".green().bold()
    } else {
        "✗ invalid".red().bold()
    };
    println!("{} blocks, {}", chain.len().to_string().bold(), verdict);
    Ok(())
}

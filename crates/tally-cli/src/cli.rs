use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "tally — single-node, tamper-evident append-only ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the ledger HTTP server
    Serve(ServeArgs),
    /// Verify the integrity of a chain dump
    Verify(VerifyArgs),
    /// Build a local chain and walk its links
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Listening port; overrides the PORT environment variable
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// JSON file holding either a block array or a /chain response document
    pub path: String,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of blocks to append after genesis
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,
}

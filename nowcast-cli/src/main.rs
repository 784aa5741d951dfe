//! Binary crate for the `nowcast` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Human-friendly output formatting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}

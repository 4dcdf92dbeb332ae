mod cli;
mod commands;
mod error;
mod extractor;
mod manifest;
mod mcp;
mod page_range;
mod pdf;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // stdout is reserved for command output and the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Extract { pdf, csv } => {
            Ok(commands::extract::run(pdf.as_deref(), csv.as_deref()))
        }
    }
}

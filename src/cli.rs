use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfslice")]
#[command(about = "Split a PDF into several files following a CSV manifest")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Write one PDF per manifest row into a `tmp` directory next to the source
    Extract {
        /// PDF file to extract from
        pdf: Option<PathBuf>,

        /// Headerless CSV manifest with rows of `filename,start_page,end_page`
        csv: Option<PathBuf>,
    },
}

use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::extractor::extract_selected;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfExtractManifestRequest {
    #[schemars(description = "Path to the source PDF file")]
    #[serde(default)]
    pub pdf_path: Option<String>,
    #[schemars(
        description = "Path to a headerless CSV manifest with rows of filename,start_page,end_page (1-based, inclusive)"
    )]
    #[serde(default)]
    pub csv_path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Split a PDF into one file per CSV manifest row. Outputs go to a `tmp` directory next to the PDF as <filename>.pdf. Rows whose start page is past the last page are listed under `unprocessed`.")]
    fn pdf_extract_manifest(
        &self,
        Parameters(req): Parameters<PdfExtractManifestRequest>,
    ) -> String {
        let pdf_path = req.pdf_path.map(PathBuf::from);
        let csv_path = req.csv_path.map(PathBuf::from);

        match extract_selected(pdf_path.as_deref(), csv_path.as_deref()) {
            Ok(report) => {
                serde_json::to_string_pretty(&report).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }
}

#[tool_handler]
impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF splitting driven by a CSV manifest. Use pdf_extract_manifest with the path \
                 of a PDF and of a manifest whose rows are filename,start_page,end_page."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}

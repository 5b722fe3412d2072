//! kintone MCP Server
//!
//! Records, comments, process management, apps and files of a kintone
//! environment over MCP.
//!
//! # Configuration
//! Set `KINTONE_SUBDOMAIN` and `KINTONE_API_TOKEN` (or `KINTONE_AUTH_TYPE=password`
//! with `KINTONE_USERNAME` / `KINTONE_PASSWORD`), in the environment or a `.env` file.

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use kintone_mcp::{KintoneConfig, KintoneMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = KintoneConfig::parse();

    mcp_common::init_tracing("kintone_mcp")?;

    tracing::info!("Starting kintone MCP Server");

    let client = config.client()?;
    tracing::info!(
        base_url = client.base_url(),
        auth = ?config.auth_type,
        "kintone client ready"
    );

    let server = KintoneMcpServer::new(client);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

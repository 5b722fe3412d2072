//! kintone MCP Library
//!
//! MCP tools for a kintone environment: record search and bulk writes,
//! comments, process management, app metadata and file attachments.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use kintone_mcp::{Auth, EmbeddableMcp, KintoneClient, KintoneMcpServer};
//! use std::time::Duration;
//!
//! let client = KintoneClient::new(
//!     "https://example.cybozu.com",
//!     &Auth::ApiToken(token),
//!     Duration::from_secs(30),
//! )?;
//! let server = KintoneMcpServer::new(client);
//! let result = server
//!     .call_tool("get_records", serde_json::json!({"app": 1, "query": "status = \"Open\" limit 20"}))
//!     .await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `KINTONE_SUBDOMAIN=example KINTONE_API_TOKEN=... kintone-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "kintone": { "command": "./kintone-mcp" } } }
//! ```

pub mod config;
pub mod handlers;
pub mod kintone;
pub mod params;
pub mod server;

// Re-export main server type
pub use server::KintoneMcpServer;

pub use config::{AuthType, KintoneConfig};
pub use kintone::{parse_query, Auth, KintoneClient, KintoneError, KintoneResult, ParsedQuery};

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};

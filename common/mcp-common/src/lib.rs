//! MCP Common - plumbing shared by the MCP servers in this workspace
//!
//! - [`init_tracing`]: stderr logging, since stdout carries the protocol
//! - [`json_success`] / [`text_success`]: `CallToolResult` builders
//! - [`IntoMcpError`] / [`ResultExt`]: domain errors to MCP errors
//! - [`EmbeddableMcp`]: call a server's tools in-process, without a transport
//!
//! ```rust,ignore
//! use mcp_common::{json_success, ResultExt};
//!
//! async fn my_tool(&self) -> Result<CallToolResult, McpError> {
//!     let data = self.client.fetch().await.to_mcp_err()?;
//!     json_success(&data)
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{internal_error, invalid_params, IntoMcpError, McpResult, ResultExt};
pub use init::init_tracing;
pub use result::{json_success, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;

//! In-process tool calls
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly by name with
//! JSON arguments, skipping the stdio transport. Servers built on rmcp's
//! `#[tool_router]` list their tools from the router and dispatch calls with
//! a `match` on the tool name:
//!
//! ```rust,ignore
//! #[async_trait]
//! impl EmbeddableMcp for MyServer {
//!     fn server_name(&self) -> &str {
//!         "my-server"
//!     }
//!
//!     fn list_tools(&self) -> Vec<Tool> {
//!         self.tool_router.list_all()
//!     }
//!
//!     async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
//!         match name {
//!             "do_thing" => self.do_thing(Parameters(serde_json::from_value(params)?)).await.map_err(Into::into),
//!             _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
//!         }
//!     }
//! }
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Errors from an in-process tool call
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with that name
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not match the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool ran and returned an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be called without a transport
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used to identify the server in configuration
    fn server_name(&self) -> &str;

    /// Every tool the server exposes, with name, description and input schema
    fn list_tools(&self) -> Vec<Tool>;

    /// Call the tool `name` with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }
}

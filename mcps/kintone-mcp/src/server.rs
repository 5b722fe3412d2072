//! MCP Server implementation for kintone
//!
//! Exposes record, app, comment, process management and file tools backed by
//! [`KintoneClient`]. Tool bodies live in [`crate::handlers`].

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;
use std::sync::Arc;

use crate::handlers;
use crate::kintone::KintoneClient;
use crate::params::*;

/// The main kintone MCP Server
#[derive(Clone)]
pub struct KintoneMcpServer {
    client: Arc<KintoneClient>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl KintoneMcpServer {
    pub fn new(client: KintoneClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    // ------------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------------

    #[tool(
        description = "Get records from a kintone app. The query may contain conditions plus 'order by', 'limit' and 'offset' clauses; a query limit never exceeds the limit argument (default 100, max 500)."
    )]
    async fn get_records(
        &self,
        Parameters(params): Parameters<GetRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_records(&self.client, params).await
    }

    #[tool(
        description = "Get every record matching a query, paging through the app automatically (500 per request)."
    )]
    async fn get_all_records(
        &self,
        Parameters(params): Parameters<GetAllRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_all_records(&self.client, params).await
    }

    #[tool(description = "Get a single record by app ID and record ID.")]
    async fn get_record(
        &self,
        Parameters(params): Parameters<GetRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_record(&self.client, params).await
    }

    #[tool(
        description = "Add a record. Fields are given as {\"field_code\": {\"value\": ...}}. Returns the new record ID and revision."
    )]
    async fn add_record(
        &self,
        Parameters(params): Parameters<AddRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_record(&self.client, params).await
    }

    #[tool(description = "Add up to 100 records in one request.")]
    async fn add_records(
        &self,
        Parameters(params): Parameters<AddRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_records(&self.client, params).await
    }

    #[tool(
        description = "Update a record identified by record ID or by an update key (a unique field and its value)."
    )]
    async fn update_record(
        &self,
        Parameters(params): Parameters<UpdateRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_record(&self.client, params).await
    }

    #[tool(description = "Update up to 100 records in one request.")]
    async fn update_records(
        &self,
        Parameters(params): Parameters<UpdateRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_records(&self.client, params).await
    }

    // ------------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------------

    #[tool(description = "Get comments on a record (newest first by default, max 10 per request).")]
    async fn get_comments(
        &self,
        Parameters(params): Parameters<GetCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_comments(&self.client, params).await
    }

    #[tool(description = "Post a comment on a record, optionally mentioning users, groups or organizations.")]
    async fn add_comment(
        &self,
        Parameters(params): Parameters<AddCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_comment(&self.client, params).await
    }

    // ------------------------------------------------------------------------
    // Process management
    // ------------------------------------------------------------------------

    #[tool(description = "Run a process management action on a record to change its status.")]
    async fn update_status(
        &self,
        Parameters(params): Parameters<UpdateStatusParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_status(&self.client, params).await
    }

    #[tool(description = "Run process management actions on up to 100 records.")]
    async fn update_statuses(
        &self,
        Parameters(params): Parameters<UpdateStatusesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_statuses(&self.client, params).await
    }

    // ------------------------------------------------------------------------
    // Apps
    // ------------------------------------------------------------------------

    #[tool(description = "Search apps by name, IDs, codes or space IDs (max 100 per request).")]
    async fn get_apps(
        &self,
        Parameters(params): Parameters<GetAppsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_apps(&self.client, params).await
    }

    #[tool(description = "Get an app's name, code, description, space and creator.")]
    async fn get_app(
        &self,
        Parameters(params): Parameters<GetAppParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_app(&self.client, params).await
    }

    #[tool(
        description = "Get the form field definitions of an app: field codes, types, labels and options."
    )]
    async fn get_form_fields(
        &self,
        Parameters(params): Parameters<GetFormFieldsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_form_fields(&self.client, params).await
    }

    // ------------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------------

    #[tool(
        description = "Upload a local file (absolute path) and return a fileKey to attach to a record's file field."
    )]
    async fn upload_file(
        &self,
        Parameters(params): Parameters<UploadFileParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::upload_file(&self.client, params).await
    }

    #[tool(description = "Download an attached file by fileKey and save it to an absolute path.")]
    async fn download_file(
        &self,
        Parameters(params): Parameters<DownloadFileParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::download_file(&self.client, params).await
    }

    // ------------------------------------------------------------------------
    // Docs
    // ------------------------------------------------------------------------

    #[tool(
        description = "Get a reference of the kintone query language: operators, functions, sorting and paging."
    )]
    async fn get_query_language_doc(&self) -> Result<CallToolResult, McpError> {
        handlers::get_query_language_doc()
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for KintoneMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "kintone MCP Server - read and write kintone records, comments and \
                 attachments, run process management actions and inspect app forms. \
                 Call get_query_language_doc before writing complex queries."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for KintoneMcpServer {
    fn server_name(&self) -> &str {
        "kintone"
    }

    fn server_description(&self) -> Option<&str> {
        Some(
            "kintone MCP Server - records, comments, process management, apps \
             and files of a kintone environment.",
        )
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get_records" => {
                let params: GetRecordsParams = serde_json::from_value(params)?;
                self.get_records(Parameters(params)).await.map_err(Into::into)
            }
            "get_all_records" => {
                let params: GetAllRecordsParams = serde_json::from_value(params)?;
                self.get_all_records(Parameters(params)).await.map_err(Into::into)
            }
            "get_record" => {
                let params: GetRecordParams = serde_json::from_value(params)?;
                self.get_record(Parameters(params)).await.map_err(Into::into)
            }
            "add_record" => {
                let params: AddRecordParams = serde_json::from_value(params)?;
                self.add_record(Parameters(params)).await.map_err(Into::into)
            }
            "add_records" => {
                let params: AddRecordsParams = serde_json::from_value(params)?;
                self.add_records(Parameters(params)).await.map_err(Into::into)
            }
            "update_record" => {
                let params: UpdateRecordParams = serde_json::from_value(params)?;
                self.update_record(Parameters(params)).await.map_err(Into::into)
            }
            "update_records" => {
                let params: UpdateRecordsParams = serde_json::from_value(params)?;
                self.update_records(Parameters(params)).await.map_err(Into::into)
            }

            "get_comments" => {
                let params: GetCommentsParams = serde_json::from_value(params)?;
                self.get_comments(Parameters(params)).await.map_err(Into::into)
            }
            "add_comment" => {
                let params: AddCommentParams = serde_json::from_value(params)?;
                self.add_comment(Parameters(params)).await.map_err(Into::into)
            }

            "update_status" => {
                let params: UpdateStatusParams = serde_json::from_value(params)?;
                self.update_status(Parameters(params)).await.map_err(Into::into)
            }
            "update_statuses" => {
                let params: UpdateStatusesParams = serde_json::from_value(params)?;
                self.update_statuses(Parameters(params)).await.map_err(Into::into)
            }

            "get_apps" => {
                let params: GetAppsParams = serde_json::from_value(params)?;
                self.get_apps(Parameters(params)).await.map_err(Into::into)
            }
            "get_app" => {
                let params: GetAppParams = serde_json::from_value(params)?;
                self.get_app(Parameters(params)).await.map_err(Into::into)
            }
            "get_form_fields" => {
                let params: GetFormFieldsParams = serde_json::from_value(params)?;
                self.get_form_fields(Parameters(params)).await.map_err(Into::into)
            }

            "upload_file" => {
                let params: UploadFileParams = serde_json::from_value(params)?;
                self.upload_file(Parameters(params)).await.map_err(Into::into)
            }
            "download_file" => {
                let params: DownloadFileParams = serde_json::from_value(params)?;
                self.download_file(Parameters(params)).await.map_err(Into::into)
            }

            "get_query_language_doc" => self.get_query_language_doc().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

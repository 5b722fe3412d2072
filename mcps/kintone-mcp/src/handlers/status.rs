//! Process management handler implementations

use mcp_common::{json_success, CallToolResult, McpError, ResultExt};
use tracing::info;

use crate::kintone::KintoneClient;
use crate::params::{UpdateStatusParams, UpdateStatusesParams};

use super::require_id;

/// Run a status action on one record
pub async fn update_status(
    client: &KintoneClient,
    params: UpdateStatusParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    let id = require_id("id", params.id)?;
    info!(app, id, action = %params.action, "update_status");

    let response = client
        .update_status(
            app,
            id,
            &params.action,
            params.assignee.as_deref(),
            params.revision,
        )
        .await
        .to_mcp_err()?;
    json_success(&response)
}

/// Run status actions on several records
pub async fn update_statuses(
    client: &KintoneClient,
    params: UpdateStatusesParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, count = params.records.len(), "update_statuses");

    let response = client
        .update_statuses(app, &params.records)
        .await
        .to_mcp_err()?;
    json_success(&response)
}

//! App handler implementations

use mcp_common::{json_success, CallToolResult, McpError, ResultExt};
use serde_json::json;

use crate::kintone::client::MAX_APPS_PER_REQUEST;
use crate::kintone::models::GetAppsRequest;
use crate::kintone::KintoneClient;
use crate::params::{GetAppParams, GetAppsParams, GetFormFieldsParams};

use super::require_id;

/// List apps matching the given filters
pub async fn get_apps(
    client: &KintoneClient,
    params: GetAppsParams,
) -> Result<CallToolResult, McpError> {
    let request = GetAppsRequest {
        name: params.name.filter(|n| !n.is_empty()),
        ids: params.ids.unwrap_or_default(),
        codes: params.codes.unwrap_or_default(),
        space_ids: params.space_ids.unwrap_or_default(),
        limit: params.limit.unwrap_or(MAX_APPS_PER_REQUEST),
        offset: params.offset.unwrap_or(0),
    };

    let response = client.get_apps(request).await.to_mcp_err()?;
    json_success(&json!({
        "count": response.apps.len(),
        "apps": response.apps,
    }))
}

/// Fetch one app
pub async fn get_app(client: &KintoneClient, params: GetAppParams) -> Result<CallToolResult, McpError> {
    let id = require_id("id", params.id)?;
    let app = client.get_app(id).await.to_mcp_err()?;
    json_success(&app)
}

/// Fetch the form field definitions of an app
pub async fn get_form_fields(
    client: &KintoneClient,
    params: GetFormFieldsParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    let response = client
        .get_form_fields(app, params.lang.as_deref())
        .await
        .to_mcp_err()?;
    json_success(&response)
}

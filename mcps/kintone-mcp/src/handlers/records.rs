//! Record handler implementations

use mcp_common::{json_success, CallToolResult, McpError, ResultExt};
use serde_json::json;
use tracing::info;

use crate::kintone::client::MAX_RECORDS_PER_REQUEST;
use crate::kintone::KintoneClient;
use crate::params::{
    AddRecordParams, AddRecordsParams, GetAllRecordsParams, GetRecordParams, GetRecordsParams,
    UpdateRecordParams, UpdateRecordsParams,
};

use super::require_id;

const DEFAULT_RECORD_LIMIT: u64 = 100;

/// Fetch one page of records
pub async fn get_records(
    client: &KintoneClient,
    params: GetRecordsParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, query = ?params.query, "get_records");

    let response = client
        .get_records(
            app,
            params.query.as_deref(),
            params.fields.as_deref(),
            params.limit.unwrap_or(DEFAULT_RECORD_LIMIT),
            params.offset.unwrap_or(0),
            params.total_count,
        )
        .await
        .to_mcp_err()?;

    json_success(&json!({
        "records": response.records,
        "totalCount": response.total_count,
    }))
}

/// Fetch every record matching the query
pub async fn get_all_records(
    client: &KintoneClient,
    params: GetAllRecordsParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, query = ?params.query, "get_all_records");

    let records = client
        .get_all_records(
            app,
            params.query.as_deref(),
            params.fields.as_deref(),
            MAX_RECORDS_PER_REQUEST,
        )
        .await
        .to_mcp_err()?;

    json_success(&json!({
        "totalCount": records.len(),
        "records": records,
    }))
}

/// Fetch a single record
pub async fn get_record(
    client: &KintoneClient,
    params: GetRecordParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    let id = require_id("id", params.id)?;

    let response = client.get_record(app, id).await.to_mcp_err()?;
    json_success(&response)
}

/// Add one record
pub async fn add_record(
    client: &KintoneClient,
    params: AddRecordParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, "add_record");

    let response = client.add_record(app, &params.record).await.to_mcp_err()?;
    json_success(&response)
}

/// Add several records
pub async fn add_records(
    client: &KintoneClient,
    params: AddRecordsParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, count = params.records.len(), "add_records");

    let response = client.add_records(app, &params.records).await.to_mcp_err()?;
    json_success(&response)
}

/// Update one record by ID or update key
pub async fn update_record(
    client: &KintoneClient,
    params: UpdateRecordParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, id = ?params.id, "update_record");

    let response = client
        .update_record(
            app,
            &params.record,
            params.id,
            params.update_key.as_ref(),
            params.revision,
        )
        .await
        .to_mcp_err()?;
    json_success(&response)
}

/// Update several records
pub async fn update_records(
    client: &KintoneClient,
    params: UpdateRecordsParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    info!(app, count = params.records.len(), "update_records");

    let response = client
        .update_records(app, &params.records)
        .await
        .to_mcp_err()?;
    json_success(&response)
}

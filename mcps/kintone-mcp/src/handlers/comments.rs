//! Comment handler implementations

use mcp_common::{json_success, CallToolResult, McpError, ResultExt};

use crate::kintone::client::MAX_COMMENTS_PER_REQUEST;
use crate::kintone::models::CommentContent;
use crate::kintone::KintoneClient;
use crate::params::{AddCommentParams, GetCommentsParams};

use super::require_id;

/// List comments on a record
pub async fn get_comments(
    client: &KintoneClient,
    params: GetCommentsParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    let record = require_id("record", params.record)?;

    let response = client
        .get_comments(
            app,
            record,
            params.order.unwrap_or_default().as_str(),
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(MAX_COMMENTS_PER_REQUEST),
        )
        .await
        .to_mcp_err()?;
    json_success(&response)
}

/// Post a comment on a record
pub async fn add_comment(
    client: &KintoneClient,
    params: AddCommentParams,
) -> Result<CallToolResult, McpError> {
    let app = require_id("app", params.app)?;
    let record = require_id("record", params.record)?;

    let comment = CommentContent {
        text: params.text,
        mentions: params.mentions,
    };
    let response = client.add_comment(app, record, &comment).await.to_mcp_err()?;
    json_success(&response)
}

//! kintone REST payload types
//!
//! Record bodies are kept as raw JSON (`{ "field_code": { "value": ... } }`)
//! since their shape depends on each app's form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record keyed by field code
pub type Record = Map<String, Value>;

/// Login user reference (creator, modifier, mention target...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub code: String,
    pub name: String,
}

// ============================================================================
// Records
// ============================================================================

/// Body of `GET /k/v1/records.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecordsRequest<'a> {
    pub app: u64,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecordsResponse {
    pub records: Vec<Record>,
    #[serde(default)]
    pub total_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRecordResponse {
    pub record: Record,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRecordResponse {
    pub id: String,
    pub revision: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRecordsResponse {
    pub ids: Vec<String>,
    pub revisions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecordResponse {
    pub revision: String,
}

/// Record id and revision after a bulk update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRevision {
    pub id: String,
    pub revision: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRecordsResponse {
    pub records: Vec<RecordRevision>,
}

/// Alternate record identifier: a field with the "prohibit duplicate values"
/// option, plus its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct UpdateKey {
    /// Field code of the unique field
    pub field: String,
    /// Value identifying the record
    pub value: Value,
}

/// One entry of a bulk record update
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordData {
    /// Record ID (either id or updateKey is required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique field used instead of the record ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_key: Option<UpdateKey>,
    /// Expected revision for optimistic locking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
    /// Field codes and values to update
    pub record: Record,
}

// ============================================================================
// Apps
// ============================================================================

/// App summary; everything but the ID may be missing depending on the
/// environment and the caller's permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub app_id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub space_id: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub creator: Option<UserInfo>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub modifier: Option<UserInfo>,
}

/// Body of `GET /k/v1/apps.json`; empty filters are omitted
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAppsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub space_ids: Vec<u64>,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAppsResponse {
    pub apps: Vec<AppInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetFormFieldsResponse {
    pub properties: Map<String, Value>,
    pub revision: String,
}

// ============================================================================
// Comments
// ============================================================================

/// Mention target in a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Mention {
    /// User, group or organization code
    pub code: String,
    /// One of USER, GROUP, ORGANIZATION
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of a new comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentContent {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub created_at: String,
    pub creator: UserInfo,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommentsResponse {
    pub comments: Vec<Comment>,
    pub older: bool,
    pub newer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentResponse {
    pub id: String,
}

// ============================================================================
// Process management
// ============================================================================

/// One entry of a bulk status update
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct StatusUpdate {
    /// Record ID
    pub id: u64,
    /// Action name as configured in the process management settings
    pub action: String,
    /// Login name of the next assignee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Expected revision for optimistic locking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusResponse {
    pub revision: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusesResponse {
    pub records: Vec<RecordRevision>,
}

// ============================================================================
// Files
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub file_key: String,
}

/// Error body returned by kintone on HTTP >= 400
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub code: Option<String>,
    pub errors: Option<Value>,
}

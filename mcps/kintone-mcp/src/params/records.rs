//! Record parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kintone::models::{Record, UpdateKey, UpdateRecordData};

/// Parameters for fetching one page of records
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetRecordsParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(
        description = "Query string to filter records (optional). May contain 'order by', 'limit' and 'offset' clauses"
    )]
    pub query: Option<String>,

    #[schemars(description = "List of field codes to retrieve (optional)")]
    pub fields: Option<Vec<String>>,

    #[schemars(description = "Maximum number of records to retrieve (default: 100, max: 500)")]
    pub limit: Option<u64>,

    #[schemars(description = "Offset for pagination (default: 0)")]
    pub offset: Option<u64>,

    #[schemars(description = "Also return the total number of matching records (optional)")]
    pub total_count: Option<bool>,
}

/// Parameters for fetching every matching record
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetAllRecordsParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "Query string to filter records (optional)")]
    pub query: Option<String>,

    #[schemars(description = "List of field codes to retrieve (optional)")]
    pub fields: Option<Vec<String>>,
}

/// Parameters for fetching a single record
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetRecordParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "The record ID")]
    pub id: u64,
}

/// Parameters for adding a record
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddRecordParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(
        description = "Record data with field codes as keys and objects with 'value' property, e.g. {\"title\": {\"value\": \"Hello\"}}"
    )]
    pub record: Record,
}

/// Parameters for adding several records
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddRecordsParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "Array of record data (max 100)")]
    pub records: Vec<Record>,
}

/// Parameters for updating a record
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateRecordParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "The record ID (either id or update_key required)")]
    pub id: Option<u64>,

    #[schemars(description = "Update key field and value (either id or update_key required)")]
    pub update_key: Option<UpdateKey>,

    #[schemars(description = "Record data with field codes to update")]
    pub record: Record,

    #[schemars(description = "Expected revision number (optional, for optimistic locking)")]
    pub revision: Option<i64>,
}

/// Parameters for updating several records
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateRecordsParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "Array of update data: {id | updateKey, revision?, record} (max 100)")]
    pub records: Vec<UpdateRecordData>,
}

//! Process management parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kintone::models::StatusUpdate;

/// Parameters for running a status action on one record
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStatusParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "The record ID")]
    pub id: u64,

    #[schemars(description = "The action name")]
    pub action: String,

    #[schemars(description = "The login name of the assignee (optional)")]
    pub assignee: Option<String>,

    #[schemars(description = "Expected revision number (optional)")]
    pub revision: Option<i64>,
}

/// Parameters for running status actions on several records
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateStatusesParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "Array of status update data: {id, action, assignee?, revision?} (max 100)")]
    pub records: Vec<StatusUpdate>,
}

//! App parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing apps
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetAppsParams {
    #[schemars(description = "Partial match for app name (case-insensitive)")]
    pub name: Option<String>,

    #[schemars(description = "List of app IDs to retrieve")]
    pub ids: Option<Vec<u64>>,

    #[schemars(description = "List of app codes to retrieve (exact match, case-sensitive)")]
    pub codes: Option<Vec<String>>,

    #[schemars(description = "List of space IDs to filter apps")]
    pub space_ids: Option<Vec<u64>>,

    #[schemars(description = "Maximum number of apps to retrieve (default: 100, max: 100)")]
    pub limit: Option<u64>,

    #[schemars(description = "Offset for pagination (default: 0)")]
    pub offset: Option<u64>,
}

/// Parameters for fetching one app
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetAppParams {
    #[schemars(description = "The app ID")]
    pub id: u64,
}

/// Parameters for fetching form fields
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetFormFieldsParams {
    #[schemars(description = "The app ID")]
    pub app: u64,

    #[schemars(description = "Language code for field labels (e.g., 'en', 'ja')")]
    pub lang: Option<String>,
}

//! File parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for uploading a file
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UploadFileParams {
    #[schemars(description = "Absolute path to the file to upload")]
    pub file_path: String,
}

/// Parameters for downloading a file
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DownloadFileParams {
    #[schemars(description = "The file key (from an attachment field value)")]
    pub file_key: String,

    #[schemars(description = "Absolute path where the file is saved")]
    pub save_path: String,
}

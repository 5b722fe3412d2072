//! File handler implementations

use std::path::{Component, Path, PathBuf};

use mcp_common::{invalid_params, json_success, CallToolResult, McpError, ResultExt};
use serde_json::json;
use tracing::info;

use crate::kintone::KintoneClient;
use crate::params::{DownloadFileParams, UploadFileParams};

/// Accept only absolute paths without `..` segments
fn checked_path(name: &str, raw: &str) -> Result<PathBuf, McpError> {
    let path = Path::new(raw);
    if !path.is_absolute() {
        return Err(invalid_params(format!("{} must be an absolute path: {}", name, raw)));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid_params(format!("{} must not contain '..': {}", name, raw)));
    }
    Ok(path.to_path_buf())
}

/// Upload a local file and return its file key
pub async fn upload_file(
    client: &KintoneClient,
    params: UploadFileParams,
) -> Result<CallToolResult, McpError> {
    let path = checked_path("file_path", &params.file_path)?;
    if !path.is_file() {
        return Err(invalid_params(format!("File not found: {}", path.display())));
    }
    info!(path = %path.display(), "upload_file");

    let response = client.upload_file(&path).await.to_mcp_err()?;
    json_success(&response)
}

/// Download a file by key and write it to `save_path`
pub async fn download_file(
    client: &KintoneClient,
    params: DownloadFileParams,
) -> Result<CallToolResult, McpError> {
    if params.file_key.trim().is_empty() {
        return Err(invalid_params("file_key cannot be empty"));
    }
    let path = checked_path("save_path", &params.save_path)?;
    info!(path = %path.display(), "download_file");

    let data = client.download_file(&params.file_key).await.to_mcp_err()?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.to_mcp_err()?;
    }
    tokio::fs::write(&path, &data).await.to_mcp_err()?;

    json_success(&json!({
        "saved_to": path.display().to_string(),
        "size": data.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_rejected() {
        let err = checked_path("file_path", "notes/report.pdf").unwrap_err();
        assert!(err.message.contains("absolute"));
    }

    #[test]
    fn test_parent_segments_rejected() {
        let err = checked_path("save_path", "/tmp/../etc/passwd").unwrap_err();
        assert!(err.message.contains(".."));
    }

    #[test]
    fn test_absolute_path_accepted() {
        assert_eq!(
            checked_path("save_path", "/tmp/out/report.pdf").unwrap(),
            PathBuf::from("/tmp/out/report.pdf")
        );
    }
}

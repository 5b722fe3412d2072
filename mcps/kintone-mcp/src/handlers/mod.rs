//! Handler implementations for kintone MCP tools
//!
//! Organized by domain: records, apps, comments, status, files, docs

mod apps;
mod comments;
mod docs;
mod files;
mod records;
mod status;

pub use apps::*;
pub use comments::*;
pub use docs::*;
pub use files::*;
pub use records::*;
pub use status::*;

use mcp_common::{internal_error, invalid_params, IntoMcpError, McpError};

use crate::kintone::KintoneError;

impl IntoMcpError for KintoneError {
    fn into_mcp_error(self) -> McpError {
        match self {
            KintoneError::Validation(msg) => invalid_params(msg),
            other => internal_error(other.describe()),
        }
    }
}

/// Reject zero IDs before they reach kintone
fn require_id(name: &str, value: u64) -> Result<u64, McpError> {
    if value == 0 {
        return Err(invalid_params(format!("{} must be a positive integer", name)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_validation_maps_to_invalid_params() {
        let err = KintoneError::Validation("too many records".to_string()).into_mcp_error();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "too many records");
    }

    #[test]
    fn test_api_error_maps_to_internal_with_code() {
        let err = KintoneError::Api {
            status: 404,
            code: Some("GAIA_RE01".to_string()),
            message: "The specified record (ID: 9) is not found.".to_string(),
            errors: None,
        }
        .into_mcp_error();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("(code: GAIA_RE01)"));
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id("app", 3).unwrap(), 3);
        assert!(require_id("app", 0).unwrap_err().message.contains("app must be"));
    }
}

//! Conversion of domain errors into MCP errors

use rmcp::ErrorData as McpError;

/// Result type for MCP tool bodies
pub type McpResult<T> = Result<T, McpError>;

/// Implemented by error types that tool bodies want to propagate with `?`
/// via [`ResultExt::to_mcp_err`]
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for std::io::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("IO error: {}", self), None)
    }
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("{:#}", self), None)
    }
}

/// Adds `to_mcp_err()` to any `Result` whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

/// Internal error: the tool ran but failed
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params error: the caller sent arguments the tool cannot use
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_io_error_is_internal() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt"));
        let err = result.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("missing.txt"));
    }

    #[test]
    fn test_anyhow_keeps_context_chain() {
        let err = anyhow::anyhow!("root cause").context("loading config");
        let mcp = err.into_mcp_error();
        assert!(mcp.message.contains("loading config"));
        assert!(mcp.message.contains("root cause"));
    }

    #[test]
    fn test_invalid_params_code() {
        let err = invalid_params("app must be positive");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("app must be positive"));
    }
}

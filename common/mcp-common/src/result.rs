//! `CallToolResult` builders

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Serialize `data` as pretty JSON into a single text content item
pub fn json_success<T: Serialize + ?Sized>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(format!("failed to serialize result: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Wrap plain text as a successful tool result
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.as_str(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_json_success_is_pretty_json() {
        let result = json_success(&json!({"id": "1", "revision": "2"})).unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        let text = text_of(&result);
        assert!(text.contains('\n'));
        assert_eq!(serde_json::from_str::<serde_json::Value>(text).unwrap()["revision"], "2");
    }

    #[test]
    fn test_text_success() {
        let result = text_success("done");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "done");
    }
}

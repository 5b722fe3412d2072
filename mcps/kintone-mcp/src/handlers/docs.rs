//! Query language reference

use mcp_common::{json_success, CallToolResult, McpError};
use serde_json::json;

const QUERY_LANGUAGE_DOC: &str = include_str!("../kintone/query_language.md");

/// Return the bundled kintone query language reference
pub fn get_query_language_doc() -> Result<CallToolResult, McpError> {
    json_success(&json!({ "documentation": QUERY_LANGUAGE_DOC }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_covers_clauses() {
        for needle in ["order by", "limit", "offset", "in (", "like"] {
            assert!(QUERY_LANGUAGE_DOC.contains(needle), "missing {}", needle);
        }
    }
}

//! Error types for kintone operations

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to kintone
#[derive(Error, Debug)]
pub enum KintoneError {
    /// kintone answered with an HTTP error status
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// kintone error code (e.g. `GAIA_AP01`)
        code: Option<String>,
        /// Human readable message from kintone
        message: String,
        /// Per-field error details
        errors: Option<Value>,
    },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Arguments rejected before any request was sent
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or malformed configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Local file access failed
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload could not be (de)serialized
    #[error("failed to process kintone JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A limit/offset numeral in a query does not fit in 64 bits
    #[error("invalid number in query: {0}")]
    QueryNumber(#[from] std::num::ParseIntError),
}

impl KintoneError {
    /// Render the error the way tool callers see it.
    ///
    /// API errors carry the kintone error code and the per-field details so
    /// the caller can fix the offending field.
    pub fn describe(&self) -> String {
        match self {
            KintoneError::Api {
                code,
                message,
                errors,
                ..
            } => {
                let mut out = format!("kintone API error: {}", message);
                if let Some(code) = code {
                    out.push_str(&format!(" (code: {})", code));
                }
                if let Some(errors) = errors {
                    out.push_str(&format!("\nDetails: {}", errors));
                }
                out
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for kintone operations
pub type KintoneResult<T> = Result<T, KintoneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_describe_api_error_with_code_and_details() {
        let err = KintoneError::Api {
            status: 400,
            code: Some("CB_VA01".to_string()),
            message: "Missing or invalid input.".to_string(),
            errors: Some(json!({"record.title.value": {"messages": ["Required field."]}})),
        };

        let text = err.describe();
        assert!(text.starts_with("kintone API error: Missing or invalid input. (code: CB_VA01)"));
        assert!(text.contains("Details: "));
        assert!(text.contains("Required field."));
    }

    #[test]
    fn test_describe_api_error_without_code() {
        let err = KintoneError::Api {
            status: 502,
            code: None,
            message: "HTTP 502: Bad Gateway".to_string(),
            errors: None,
        };
        assert_eq!(err.describe(), "kintone API error: HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_describe_other_errors_use_display() {
        let err = KintoneError::Validation("app must be positive".to_string());
        assert_eq!(err.describe(), "validation error: app must be positive");
    }
}

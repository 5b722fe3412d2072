//! kintone authentication
//!
//! kintone accepts either an API token (scoped to one or more apps) or a
//! login name and password. Both travel as request headers.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::error::{KintoneError, KintoneResult};

/// Header carrying one or more comma-separated API tokens
pub const API_TOKEN_HEADER: &str = "x-cybozu-api-token";
/// Header carrying base64(`login:password`)
pub const PASSWORD_HEADER: &str = "x-cybozu-authorization";

/// Credentials used for every request
#[derive(Clone)]
pub enum Auth {
    /// API token authentication
    ApiToken(String),
    /// Login name / password authentication
    Password { username: String, password: String },
}

impl Auth {
    /// Build the authentication header for this credential
    pub fn headers(&self) -> KintoneResult<HeaderMap> {
        let (name, value) = match self {
            Auth::ApiToken(token) => (API_TOKEN_HEADER, token.clone()),
            Auth::Password { username, password } => (
                PASSWORD_HEADER,
                STANDARD.encode(format!("{}:{}", username, password)),
            ),
        };

        let mut value = HeaderValue::from_str(&value)
            .map_err(|_| KintoneError::Config(format!("{} contains invalid characters", name)))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(name), value);
        Ok(headers)
    }

    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Auth::ApiToken(_) => "api_token",
            Auth::Password { .. } => "password",
        }
    }
}

// Credentials never reach logs.
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::ApiToken(_) => f.write_str("ApiToken(***)"),
            Auth::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_header() {
        let auth = Auth::ApiToken("secret-token".to_string());
        let headers = auth.headers().unwrap();
        assert_eq!(headers.get(API_TOKEN_HEADER).unwrap(), "secret-token");
        assert!(headers.get(PASSWORD_HEADER).is_none());
    }

    #[test]
    fn test_password_header_is_base64() {
        let auth = Auth::Password {
            username: "alice".to_string(),
            password: "p@ss".to_string(),
        };
        let headers = auth.headers().unwrap();
        // base64("alice:p@ss")
        assert_eq!(headers.get(PASSWORD_HEADER).unwrap(), "YWxpY2U6cEBzcw==");
        assert!(headers.get(API_TOKEN_HEADER).is_none());
    }

    #[test]
    fn test_invalid_token_is_config_error() {
        let auth = Auth::ApiToken("bad\ntoken".to_string());
        assert!(matches!(auth.headers(), Err(KintoneError::Config(_))));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let auth = Auth::Password {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", auth);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));

        let token = format!("{:?}", Auth::ApiToken("abc".to_string()));
        assert!(!token.contains("abc"));
    }
}

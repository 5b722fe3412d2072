//! Configuration for kintone-mcp
//!
//! Every setting can be given as a command line flag or a `KINTONE_*`
//! environment variable. A `.env` file in the working directory is loaded
//! first, so variables defined there act as defaults.

use clap::{Parser, ValueEnum};
use std::time::Duration;

use crate::kintone::{Auth, KintoneClient, KintoneError, KintoneResult};

/// How requests authenticate against kintone
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthType {
    /// `X-Cybozu-API-Token`
    #[value(name = "api_token")]
    ApiToken,
    /// `X-Cybozu-Authorization` (login name and password)
    #[value(name = "password")]
    Password,
}

/// kintone MCP server - records, apps, comments and files over MCP
#[derive(Parser, Clone)]
#[command(name = "kintone-mcp")]
#[command(author, version, about, long_about = None)]
pub struct KintoneConfig {
    /// Subdomain of the kintone environment (e.g. `example` for example.cybozu.com)
    #[arg(long, env = "KINTONE_SUBDOMAIN")]
    pub subdomain: Option<String>,

    /// Domain hosting the environment
    #[arg(long, env = "KINTONE_DOMAIN", default_value = "cybozu.com")]
    pub domain: String,

    /// Full base URL, overriding subdomain and domain
    #[arg(long, env = "KINTONE_BASE_URL")]
    pub base_url: Option<String>,

    /// Authentication method
    #[arg(long, env = "KINTONE_AUTH_TYPE", value_enum, default_value_t = AuthType::ApiToken)]
    pub auth_type: AuthType,

    /// API token(s), comma separated
    #[arg(long, env = "KINTONE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Login name for password authentication
    #[arg(long, env = "KINTONE_USERNAME")]
    pub username: Option<String>,

    /// Password for password authentication
    #[arg(long, env = "KINTONE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "KINTONE_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

impl KintoneConfig {
    /// Resolve the base URL requests are sent to
    pub fn base_url(&self) -> KintoneResult<String> {
        if let Some(url) = non_empty(&self.base_url) {
            return Ok(url.trim_end_matches('/').to_string());
        }

        let subdomain = non_empty(&self.subdomain).ok_or_else(|| {
            KintoneError::Config("KINTONE_SUBDOMAIN (or KINTONE_BASE_URL) is required".to_string())
        })?;

        let domain = normalize_domain(&self.domain);
        if domain.is_empty() {
            return Err(KintoneError::Config("KINTONE_DOMAIN cannot be empty".to_string()));
        }

        Ok(format!("https://{}.{}", subdomain, domain))
    }

    /// Build the credential for the configured auth type
    pub fn auth(&self) -> KintoneResult<Auth> {
        match self.auth_type {
            AuthType::ApiToken => {
                let token = non_empty(&self.api_token).ok_or_else(|| {
                    KintoneError::Config(
                        "KINTONE_API_TOKEN is required for API token authentication".to_string(),
                    )
                })?;
                Ok(Auth::ApiToken(token.to_string()))
            }
            AuthType::Password => match (non_empty(&self.username), non_empty(&self.password)) {
                (Some(username), Some(password)) => Ok(Auth::Password {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
                _ => Err(KintoneError::Config(
                    "KINTONE_USERNAME and KINTONE_PASSWORD are required for password authentication"
                        .to_string(),
                )),
            },
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Build a client from this configuration
    pub fn client(&self) -> KintoneResult<KintoneClient> {
        KintoneClient::new(self.base_url()?, &self.auth()?, self.timeout())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Strip an accidental scheme and trailing slashes from a domain
fn normalize_domain(domain: &str) -> &str {
    let domain = domain.trim();
    let domain = match domain.split_once("://") {
        Some((_, rest)) => rest,
        None => domain,
    };
    domain.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Defaults as clap would produce them with no flags and no `KINTONE_*`
    /// variables, independent of the test process environment
    fn config() -> KintoneConfig {
        KintoneConfig {
            subdomain: None,
            domain: "cybozu.com".to_string(),
            base_url: None,
            auth_type: AuthType::ApiToken,
            api_token: None,
            username: None,
            password: None,
            timeout: 30,
        }
    }

    #[test]
    fn test_base_url_from_subdomain() {
        let config = KintoneConfig {
            subdomain: Some("example".to_string()),
            ..config()
        };
        assert_eq!(config.base_url().unwrap(), "https://example.cybozu.com");
    }

    #[test]
    fn test_base_url_with_custom_domain() {
        let config = KintoneConfig {
            subdomain: Some("example".to_string()),
            domain: "https://kintone.com/".to_string(),
            ..config()
        };
        assert_eq!(config.base_url().unwrap(), "https://example.kintone.com");
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = KintoneConfig {
            subdomain: Some("example".to_string()),
            base_url: Some("http://localhost:8080/".to_string()),
            ..config()
        };
        assert_eq!(config.base_url().unwrap(), "http://localhost:8080");
    }

    #[test]
    fn test_missing_subdomain_is_config_error() {
        let config = KintoneConfig {
            api_token: Some("t".to_string()),
            ..config()
        };
        let err = config.base_url().unwrap_err();
        assert!(matches!(err, KintoneError::Config(_)));
        assert!(err.to_string().contains("KINTONE_SUBDOMAIN"));
    }

    #[test]
    fn test_blank_subdomain_is_missing() {
        let config = KintoneConfig {
            subdomain: Some("  ".to_string()),
            ..config()
        };
        assert!(matches!(config.base_url(), Err(KintoneError::Config(_))));
    }

    #[test]
    fn test_api_token_auth() {
        let config = KintoneConfig {
            api_token: Some(" abc,def ".to_string()),
            ..config()
        };
        match config.auth().unwrap() {
            Auth::ApiToken(token) => assert_eq!(token, "abc,def"),
            other => panic!("unexpected auth: {:?}", other),
        }
    }

    #[test]
    fn test_api_token_required_by_default() {
        let err = config().auth().unwrap_err();
        assert!(err.to_string().contains("KINTONE_API_TOKEN"));
    }

    #[test]
    fn test_password_auth() {
        let config = KintoneConfig {
            auth_type: AuthType::Password,
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..config()
        };
        assert_eq!(config.auth().unwrap().kind(), "password");
    }

    #[test]
    fn test_password_auth_requires_both_fields() {
        let config = KintoneConfig {
            auth_type: AuthType::Password,
            username: Some("alice".to_string()),
            ..config()
        };
        let err = config.auth().unwrap_err();
        assert!(err.to_string().contains("KINTONE_PASSWORD"));
    }

    #[test]
    fn test_timeout() {
        assert_eq!(config().timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_flags_are_parsed() {
        let config = KintoneConfig::try_parse_from([
            "kintone-mcp",
            "--subdomain",
            "example",
            "--domain",
            "kintone.com",
            "--auth-type",
            "password",
            "--username",
            "alice",
            "--password",
            "secret",
            "--timeout",
            "5",
        ])
        .unwrap();

        assert_eq!(config.subdomain.as_deref(), Some("example"));
        assert_eq!(config.domain, "kintone.com");
        assert_eq!(config.auth_type, AuthType::Password);
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_auth_type_rejected() {
        let result = KintoneConfig::try_parse_from(["kintone-mcp", "--auth-type", "oauth"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("cybozu.com"), "cybozu.com");
        assert_eq!(normalize_domain(" https://cybozu.com// "), "cybozu.com");
    }
}

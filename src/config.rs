//! Client configuration
//!
//! A `ClientConfig` describes how to reach a HAL API: the root URL and its
//! optional proxy substitute, shared headers, credentials and HTTP behaviour.
//! It is usually loaded from a YAML (or JSON) file:
//!
//! ```yaml
//! root_url: http://backend:8080/api
//! proxy_url: http://localhost:4200/api
//! headers:
//!   X-Tenant: acme
//! auth:
//!   type: bearer
//!   token: abc123
//! http:
//!   timeout_seconds: 10
//!   max_retries: 0
//!   retry_backoff:
//!     type: constant
//!     initial_ms: 250
//!   rate_limit:
//!     requests_per_second: 5
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::hal::ProxyRule;
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-Level Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Root URL of the API as it appears in HAL links
    #[serde(default)]
    pub root_url: Option<String>,

    /// URL substituted for `root_url` before each request
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: StringMap,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
}

impl ClientConfig {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parse configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field combinations serde cannot express
    pub fn validate(&self) -> Result<()> {
        let proxy = self.proxy_url.clone().none_if_empty();
        let root = self.root_url.clone().none_if_empty();
        if proxy.is_some() && root.is_none() {
            return Err(Error::missing_field("root_url"));
        }
        Ok(())
    }

    /// Proxy substitution described by this config
    pub fn proxy_rule(&self) -> ProxyRule {
        ProxyRule {
            root_url: self.root_url.clone(),
            proxy_url: self.proxy_url.clone(),
        }
    }

    /// HTTP client settings described by this config
    pub fn http_client_config(&self) -> HttpClientConfig {
        let http = &self.http;
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(http.timeout_seconds))
            .max_retries(http.max_retries)
            .backoff(
                http.retry_backoff.backoff_type,
                Duration::from_millis(http.retry_backoff.initial_ms),
                Duration::from_millis(http.retry_backoff.max_ms),
            );
        builder = match &http.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        if let Some(agent) = &http.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries (0 disables retrying)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Rate limiting configuration (absent = unlimited)
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: None,
            user_agent: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

/// Backoff configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    60000
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    const FULL_YAML: &str = r"
root_url: http://backend:8080/api
proxy_url: http://localhost:4200/api
headers:
  X-Tenant: acme
auth:
  type: bearer
  token: abc123
http:
  timeout_seconds: 10
  max_retries: 0
  retry_backoff:
    type: constant
    initial_ms: 250
  rate_limit:
    requests_per_second: 5
";

    #[test]
    fn test_parse_full_yaml() {
        let config = ClientConfig::from_yaml(FULL_YAML).unwrap();

        assert_eq!(config.root_url.as_deref(), Some("http://backend:8080/api"));
        assert_eq!(config.headers.get("X-Tenant"), Some(&"acme".to_string()));
        assert_eq!(
            config.auth,
            AuthConfig::Bearer {
                token: "abc123".to_string()
            }
        );
        assert_eq!(config.http.timeout_seconds, 10);
        assert_eq!(config.http.retry_backoff.backoff_type, BackoffType::Constant);
        assert_eq!(config.http.retry_backoff.max_ms, 60000);
        assert_eq!(
            config.http.rate_limit,
            Some(RateLimiterConfig::new(5, 10))
        );
    }

    #[test]
    fn test_defaults_from_empty_document() {
        let config = ClientConfig::from_yaml("{}").unwrap();

        assert!(config.root_url.is_none());
        assert!(config.auth.is_none());
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http.max_retries, 3);
        assert!(config.http.rate_limit.is_none());
        assert!(!config.proxy_rule().is_active());
    }

    #[test]
    fn test_proxy_without_root_is_rejected() {
        let err = ClientConfig::from_yaml("proxy_url: http://localhost:4200/api").unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: root_url");
    }

    #[test]
    fn test_proxy_rule_from_config() {
        let config = ClientConfig::from_yaml(FULL_YAML).unwrap();
        let rule = config.proxy_rule();

        assert!(rule.is_active());
        assert_eq!(
            rule.rewrite("http://backend:8080/api/users?page=1"),
            "http://localhost:4200/api/users?page=1"
        );
    }

    #[test]
    fn test_http_client_config_mapping() {
        let config = ClientConfig::from_yaml(FULL_YAML).unwrap();
        let http = config.http_client_config();

        assert_eq!(http.timeout, Duration::from_secs(10));
        assert_eq!(http.max_retries, 0);
        assert_eq!(http.backoff_type, BackoffType::Constant);
        assert_eq!(http.initial_backoff, Duration::from_millis(250));
        assert_eq!(http.rate_limit, Some(RateLimiterConfig::new(5, 10)));
    }

    #[test]
    fn test_load_yaml_and_json_files() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("client.yaml");
        let mut file = fs::File::create(&yaml_path).unwrap();
        file.write_all(FULL_YAML.as_bytes()).unwrap();
        let config = ClientConfig::load(&yaml_path).unwrap();
        assert_eq!(config.proxy_url.as_deref(), Some("http://localhost:4200/api"));

        let json_path = dir.path().join("client.json");
        fs::write(
            &json_path,
            r#"{"root_url": "http://h/api", "http": {"max_retries": 1}}"#,
        )
        .unwrap();
        let config = ClientConfig::load(&json_path).unwrap();
        assert_eq!(config.http.max_retries, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ClientConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test_case("http:\n  timeout_ms: 500\n" ; "unknown http key")]
    #[test_case("http:\n  retry_backoff:\n    initial_backoff_ms: 5\n" ; "unknown backoff key")]
    #[test_case("http:\n  rate_limit:\n    rps: 5\n" ; "unknown rate limit key")]
    #[test_case("root: http://backend/api\n" ; "unknown top level key")]
    fn test_unknown_keys_are_rejected(yaml: &str) {
        let err = ClientConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)), "got {err:?}");
    }

    #[test]
    fn test_misspelled_timeout_does_not_fall_back_to_default() {
        assert!(ClientConfig::from_json(r#"{"http": {"timeout_ms": 500}}"#).is_err());
        let config = ClientConfig::from_json(r#"{"http": {"timeout_seconds": 5}}"#).unwrap();
        assert_eq!(config.http_client_config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let err = ClientConfig::from_yaml("http: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }
}

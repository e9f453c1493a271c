//! Auth configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authentication configuration
///
/// Deserializes from a `type`-tagged map, e.g.
///
/// ```yaml
/// auth:
///   type: bearer
///   token: abc123
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// API key sent in a header
    ApiKey {
        /// Header name (defaults to `Authorization`)
        #[serde(default)]
        header_name: Option<String>,
        /// Prefix to add before the value (e.g., "Token ")
        #[serde(default)]
        prefix: Option<String>,
        /// The API key value
        value: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username
        username: String,
        /// Password
        #[serde(default)]
        password: Option<String>,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// Arbitrary headers
    CustomHeaders {
        /// Headers to add to every request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Check whether any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

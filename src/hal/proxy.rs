//! Root URL to proxy URL substitution

use serde::{Deserialize, Serialize};

/// Rewrites URLs served under `root_url` so they go through `proxy_url`.
///
/// Only a leading `root_url` is replaced. Path and query are kept verbatim,
/// and URLs outside the root pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProxyRule {
    #[serde(default)]
    pub root_url: Option<String>,
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl ProxyRule {
    /// Create a rule replacing `root_url` with `proxy_url`
    pub fn new(root_url: impl Into<String>, proxy_url: impl Into<String>) -> Self {
        Self {
            root_url: Some(root_url.into()),
            proxy_url: Some(proxy_url.into()),
        }
    }

    /// A rule that never rewrites
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether a substitution is configured
    pub fn is_active(&self) -> bool {
        let set = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        set(&self.root_url) && set(&self.proxy_url)
    }

    /// Apply the substitution to `url`
    pub fn rewrite(&self, url: &str) -> String {
        if !self.is_active() {
            return url.to_string();
        }
        let root = self.root_url.as_deref().unwrap_or_default();
        let proxy = self.proxy_url.as_deref().unwrap_or_default();
        match url.strip_prefix(root) {
            Some(rest) if at_boundary(root, rest) => format!("{proxy}{rest}"),
            _ => url.to_string(),
        }
    }
}

/// Whether `rest` starts a new path segment, query or fragment after `root`
fn at_boundary(root: &str, rest: &str) -> bool {
    root.ends_with('/') || rest.is_empty() || rest.starts_with(['/', '?', '#'])
}

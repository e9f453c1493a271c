//! Client context shared by every page of a collection

use crate::config::ClientConfig;
use crate::error::Result;
use crate::hal::ProxyRule;
use crate::http::{HttpClient, Transport};
use crate::types::StringMap;
use std::sync::Arc;

/// Media type requested from the API
pub const HAL_JSON: &str = "application/hal+json";

/// Transport, proxy rule and shared headers a collection needs to navigate.
///
/// Cheap to clone; every page produced by navigation carries a copy.
#[derive(Clone)]
pub struct HalContext {
    transport: Arc<dyn Transport>,
    proxy: ProxyRule,
    headers: StringMap,
}

impl HalContext {
    /// Create a context around `transport` with the default `Accept` header
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let mut headers = StringMap::new();
        headers.insert("Accept".to_string(), HAL_JSON.to_string());
        Self {
            transport,
            proxy: ProxyRule::disabled(),
            headers,
        }
    }

    /// Build an HTTP backed context from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = HttpClient::with_auth(config.http_client_config(), config.auth.clone())?;
        let mut context = Self::new(Arc::new(client)).with_proxy(config.proxy_rule());
        context.headers.extend(config.headers.clone());
        Ok(context)
    }

    /// Set the proxy substitution
    #[must_use]
    pub fn with_proxy(mut self, proxy: ProxyRule) -> Self {
        self.proxy = proxy;
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn proxy(&self) -> &ProxyRule {
        &self.proxy
    }

    pub fn headers(&self) -> &StringMap {
        &self.headers
    }

    /// Apply the proxy substitution to `url`
    pub fn resolve(&self, url: &str) -> String {
        self.proxy.rewrite(url)
    }
}

impl std::fmt::Debug for HalContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HalContext")
            .field("proxy", &self.proxy)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

//! Transport seam between collections and the network

use super::client::{HttpClient, RequestConfig};
use crate::error::Result;
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use std::sync::Arc;

/// Issues GET requests and returns the decoded JSON body.
///
/// Collections only ever talk to a `dyn Transport`, so tests and embedding
/// applications can swap in their own implementation. Errors must be returned
/// untouched; callers propagate them as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` with the given extra headers and parse the body as JSON
    async fn get_json(&self, url: &str, headers: &StringMap) -> Result<JsonValue>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, url: &str, headers: &StringMap) -> Result<JsonValue> {
        self.get_json_with_config(url, RequestConfig::new().headers(headers))
            .await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get_json(&self, url: &str, headers: &StringMap) -> Result<JsonValue> {
        (**self).get_json(url, headers).await
    }
}

//! HTTP catalog source.

use super::CatalogSource;
use crate::catalog::{CatalogError, CatalogResponse};
use crate::error::ShopError;

/// Fetches `GET {url}` and decodes the catalog wire shape. Transport
/// errors and non-2xx statuses surface as fetch failures; undecodable
/// bodies as malformed catalogs.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Uses a preconfigured client (timeouts, proxy) instead of the default.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<CatalogResponse, ShopError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ShopError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| ShopError::Fetch(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ShopError::Fetch(e.to_string()))?;

        Ok(serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))?)
    }
}

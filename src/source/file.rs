//! File-backed catalog source with a TTL cache.

use super::CatalogSource;
use crate::catalog::{CatalogError, CatalogResponse};
use crate::error::ShopError;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Reads the catalog document from a JSON file, caching the parsed result.
///
/// The upstream data this stands in for is slow to produce (a remote
/// spreadsheet in the original deployment), so the endpoint keeps a
/// short-lived cache; re-reads go through only after `ttl` elapses.
pub struct FileCatalogSource {
    path: PathBuf,
    ttl: Duration,
    cache: Mutex<Option<CacheSlot>>,
}

struct CacheSlot {
    loaded_at: Instant,
    response: CatalogResponse,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
            cache: Mutex::new(None),
        }
    }

    fn cached(&self) -> Option<CatalogResponse> {
        let guard = self.cache.lock().ok()?;
        guard
            .as_ref()
            .filter(|slot| slot.loaded_at.elapsed() < self.ttl)
            .map(|slot| slot.response.clone())
    }

    fn store(&self, response: &CatalogResponse) {
        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CacheSlot {
                loaded_at: Instant::now(),
                response: response.clone(),
            });
        }
    }
}

impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<CatalogResponse, ShopError> {
        if let Some(cached) = self.cached() {
            return Ok(cached);
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ShopError::Fetch(format!("read {}: {e}", self.path.display())))?;
        let response: CatalogResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        self.store(&response);
        tracing::debug!(path = %self.path.display(), "catalog document reloaded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_doc(value: &serde_json::Value) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "catalog-src-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        std::fs::write(&path, serde_json::to_vec(value).unwrap()).unwrap();
        path
    }

    fn brand_count(response: &CatalogResponse) -> usize {
        match response {
            CatalogResponse::Flat(_) => 1,
            CatalogResponse::ByBrand(map) => map.len(),
        }
    }

    #[tokio::test]
    async fn cache_serves_until_ttl() {
        let path = temp_doc(&json!({ "Acme": [{ "id": 1, "name": "Widget", "price": 100 }] }));
        let source = FileCatalogSource::new(&path, Duration::from_secs(300));

        let first = source.fetch().await.expect("fetch");
        assert_eq!(brand_count(&first), 1);

        // Grow the document on disk; the cached copy must still be served.
        std::fs::write(
            &path,
            serde_json::to_vec(&json!({
                "Acme": [{ "id": 1, "name": "Widget", "price": 100 }],
                "Zenith": [{ "id": 2, "name": "Anvil", "price": 50 }]
            }))
            .unwrap(),
        )
        .unwrap();

        let cached = source.fetch().await.expect("fetch");
        assert_eq!(brand_count(&cached), 1);

        let uncached = FileCatalogSource::new(&path, Duration::ZERO);
        let fresh = uncached.fetch().await.expect("fetch");
        assert_eq!(brand_count(&fresh), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_failure() {
        let source = FileCatalogSource::new(
            std::env::temp_dir().join("definitely-missing.json"),
            Duration::ZERO,
        );

        assert!(matches!(source.fetch().await, Err(ShopError::Fetch(_))));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let path = std::env::temp_dir().join(format!(
            "catalog-bad-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        std::fs::write(&path, b"not json {{{").unwrap();
        let source = FileCatalogSource::new(&path, Duration::ZERO);

        assert!(matches!(source.fetch().await, Err(ShopError::Malformed(_))));
    }
}

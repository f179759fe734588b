//! Catalog Acquisition Module
//!
//! Sources only move bytes into the wire shape; normalization and
//! validation stay with [`CatalogStore::load`](crate::catalog::CatalogStore::load)
//! on the consumer side.

pub mod file;
pub mod http;

// Re-export commonly used types for convenience
pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;

use crate::catalog::CatalogResponse;
use crate::error::ShopError;
use std::future::Future;

/// Anything the catalog can be fetched from.
pub trait CatalogSource {
    /// Retrieves the raw catalog response.
    fn fetch(&self) -> impl Future<Output = Result<CatalogResponse, ShopError>> + Send;
}

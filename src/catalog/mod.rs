//! Product Catalog Domain Module
//!
//! This module contains everything catalog-related:
//! - Wire-level shapes the products endpoint may return
//! - Normalization and schema validation
//! - The read-only store the rest of the app looks products up in

pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CatalogResponse, Product, ProductId, RawProduct, DEFAULT_BRAND};
pub use store::{CatalogError, CatalogStore};

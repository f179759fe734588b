//! Error taxonomy.
//!
//! Only two things can actually fail: getting the catalog and decoding it.
//! Stale references are a policy (silent skip), not an error, and order
//! composition has no failure mode at all.

use crate::catalog::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    /// Network failure or a non-2xx status from the catalog endpoint.
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    /// The response was retrieved but violates the catalog schema.
    #[error(transparent)]
    Malformed(#[from] CatalogError),
}

//! Catalog Domain Models
//!
//! Wire-level and normalized data structures for the product catalog.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Brand products land under when the source returns a flat array with no
/// brand level at all.
pub const DEFAULT_BRAND: &str = "General";

// =============================================================================
// Product Identity
// =============================================================================

/// Stable product identifier, unique across the whole catalog.
///
/// Sources disagree on the JSON type (integers in the static catalogs,
/// strings in the spreadsheet-backed one); both are accepted and normalized
/// to the string form here, so cart and order code only ever sees one shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<i64> for ProductId {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(i64),
            Str(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Num(n) => ProductId(n.to_string()),
            Repr::Str(s) => ProductId(s),
        })
    }
}

// =============================================================================
// Products
// =============================================================================

/// A catalog product after normalization. Immutable once loaded; identity
/// is `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,

    /// Canonical display name. The wire field `title` from older catalog
    /// variants is folded into this at the deserialization boundary.
    pub name: String,

    /// Price in whole currency units.
    pub price: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire-level product as fetched, before validation.
///
/// Field presence is checked by [`CatalogStore::load`](super::CatalogStore::load),
/// which is why everything is optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: Option<ProductId>,

    #[serde(alias = "title")]
    pub name: Option<String>,

    pub price: Option<f64>,

    pub description: Option<String>,
}

/// The two response shapes `GET /api/products` is allowed to return: the
/// flat array of the early variants, or the brand map of the spreadsheet
/// variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Flat(Vec<RawProduct>),
    ByBrand(BTreeMap<String, Vec<RawProduct>>),
}

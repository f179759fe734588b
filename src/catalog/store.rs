//! Catalog normalization and lookup.
//!
//! `CatalogStore` owns the normalized brand -> products structure. It is
//! built once per fetch and replaced wholesale on the next one; nothing in
//! here mutates after `load`.

use super::models::{CatalogResponse, Product, ProductId, RawProduct, DEFAULT_BRAND};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Schema violations in fetched catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The body is not one of the two known wire shapes.
    #[error("undecodable catalog document: {0}")]
    Decode(String),

    #[error("product {index} of brand {brand:?} has no id")]
    MissingId { brand: String, index: usize },

    #[error("product {id} has no name")]
    MissingName { id: ProductId },

    #[error("product {id} has no usable price")]
    MissingPrice { id: ProductId },

    #[error("product {id} has negative price {price}")]
    NegativePrice { id: ProductId, price: f64 },

    #[error("product id {id} appears in both {first:?} and {second:?}")]
    DuplicateId {
        id: ProductId,
        first: String,
        second: String,
    },
}

/// Normalized catalog: brand -> name-sorted products, plus an id index for
/// constant-time lookup across brands.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    by_brand: BTreeMap<String, Vec<Product>>,
    index: HashMap<ProductId, (String, usize)>,
}

impl CatalogStore {
    /// An empty catalog, the state before the first successful fetch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalizes a fetched response into a materialized catalog.
    ///
    /// Both wire shapes are accepted; a flat product array lands under
    /// [`DEFAULT_BRAND`]. Products are validated here so nothing past this
    /// boundary ever sees a partial one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a product lacks an id, name or price, a
    /// price is negative, or an id repeats anywhere in the catalog.
    pub fn load(raw: CatalogResponse) -> Result<Self, CatalogError> {
        let grouped: BTreeMap<String, Vec<RawProduct>> = match raw {
            CatalogResponse::Flat(products) => {
                BTreeMap::from([(DEFAULT_BRAND.to_string(), products)])
            }
            CatalogResponse::ByBrand(map) => map,
        };

        let mut by_brand = BTreeMap::new();
        for (brand, raw_products) in grouped {
            let mut products = Vec::with_capacity(raw_products.len());
            for (index, raw_product) in raw_products.into_iter().enumerate() {
                products.push(validate(&brand, index, raw_product)?);
            }
            // Ordering policy: name ascending with id as tiebreak, fixed at
            // load time rather than left to map iteration order.
            products.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
            by_brand.insert(brand, products);
        }

        let mut index = HashMap::new();
        for (brand, products) in &by_brand {
            for (pos, product) in products.iter().enumerate() {
                if let Some((first, _)) = index.insert(product.id.clone(), (brand.clone(), pos)) {
                    return Err(CatalogError::DuplicateId {
                        id: product.id.clone(),
                        first,
                        second: brand.clone(),
                    });
                }
            }
        }

        Ok(Self { by_brand, index })
    }

    /// O(1) lookup across all brands.
    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        let (brand, pos) = self.index.get(id)?;
        self.by_brand
            .get(brand)
            .and_then(|products| products.get(*pos))
    }

    /// Brand names in alphabetical order.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.by_brand.keys().map(String::as_str)
    }

    pub fn contains_brand(&self, brand: &str) -> bool {
        self.by_brand.contains_key(brand)
    }

    /// Products of one brand, name-ascending. Unknown brands yield an empty
    /// slice: a stale selection after a catalog replace is not an error.
    pub fn products_of(&self, brand: &str) -> &[Product] {
        self.by_brand.get(brand).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The normalized brand -> products view, as served by the catalog
    /// endpoint. Only canonical field names appear in it.
    pub fn document(&self) -> &BTreeMap<String, Vec<Product>> {
        &self.by_brand
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn product_count(&self) -> usize {
        self.index.len()
    }
}

fn validate(brand: &str, index: usize, raw: RawProduct) -> Result<Product, CatalogError> {
    let id = raw.id.ok_or_else(|| CatalogError::MissingId {
        brand: brand.to_string(),
        index,
    })?;
    let name = raw
        .name
        .ok_or_else(|| CatalogError::MissingName { id: id.clone() })?;
    let price = raw
        .price
        .filter(|price| price.is_finite())
        .ok_or_else(|| CatalogError::MissingPrice { id: id.clone() })?;
    if price < 0.0 {
        return Err(CatalogError::NegativePrice { id, price });
    }

    // The spreadsheet source stores prices as int(float(..)); keep the same
    // truncation instead of rejecting fractional values.
    Ok(Product {
        id,
        name,
        price: price.trunc() as u64,
        description: raw.description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load(value: serde_json::Value) -> Result<CatalogStore, CatalogError> {
        let raw: CatalogResponse = serde_json::from_value(value).expect("wire shape");
        CatalogStore::load(raw)
    }

    #[test]
    fn normalizes_brand_map_with_sorted_views() {
        let store = load(json!({
            "Zenith": [{ "id": "z-1", "name": "Anvil", "price": 250 }],
            "Acme": [
                { "id": 2, "name": "Zest", "price": 300 },
                { "id": 1, "name": "Widget", "price": 100 }
            ]
        }))
        .unwrap();

        assert_eq!(store.brands().collect::<Vec<_>>(), vec!["Acme", "Zenith"]);
        let acme: Vec<_> = store
            .products_of("Acme")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(acme, vec!["Widget", "Zest"]);
        assert_eq!(store.product_count(), 3);
    }

    #[test]
    fn flat_array_lands_under_default_brand() {
        let store = load(json!([
            { "id": 1, "title": "Iced Mango", "price": 550, "description": "Tropical mango" }
        ]))
        .unwrap();

        assert_eq!(store.brands().collect::<Vec<_>>(), vec![DEFAULT_BRAND]);
        let product = store.find_by_id(&ProductId::from(1)).unwrap();
        // `title` is an alias of the canonical `name`
        assert_eq!(product.name, "Iced Mango");
        assert_eq!(product.price, 550);
        assert_eq!(product.description.as_deref(), Some("Tropical mango"));
    }

    #[test]
    fn numeric_and_string_ids_share_one_form() {
        let store = load(json!({
            "Acme": [{ "id": 7, "name": "Widget", "price": 100 }]
        }))
        .unwrap();

        assert!(store.find_by_id(&ProductId::from("7")).is_some());
    }

    #[test]
    fn duplicate_id_across_brands_is_rejected() {
        let err = load(json!({
            "Acme": [{ "id": 1, "name": "Widget", "price": 100 }],
            "Zenith": [{ "id": 1, "name": "Anvil", "price": 250 }]
        }))
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn missing_fields_are_schema_errors() {
        assert!(matches!(
            load(json!({ "Acme": [{ "name": "Widget", "price": 100 }] })).unwrap_err(),
            CatalogError::MissingId { .. }
        ));
        assert!(matches!(
            load(json!({ "Acme": [{ "id": 1, "price": 100 }] })).unwrap_err(),
            CatalogError::MissingName { .. }
        ));
        assert!(matches!(
            load(json!({ "Acme": [{ "id": 1, "name": "Widget" }] })).unwrap_err(),
            CatalogError::MissingPrice { .. }
        ));
        assert!(matches!(
            load(json!({ "Acme": [{ "id": 1, "name": "Widget", "price": -5 }] })).unwrap_err(),
            CatalogError::NegativePrice { .. }
        ));
    }

    #[test]
    fn unknown_brand_yields_empty_views() {
        let store = CatalogStore::empty();

        assert!(store.is_empty());
        assert!(store.products_of("Nowhere").is_empty());
        assert!(store.find_by_id(&ProductId::from(1)).is_none());
    }
}

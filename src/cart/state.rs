//! Cart quantity state.
//!
//! The cart is created empty at session start, mutated only through the
//! operations below, and discarded with the session. Nothing here is
//! persisted.

use super::models::{CartEntry, CartSummary};
use crate::catalog::{CatalogStore, ProductId};

/// The user's accumulated product -> quantity selections for one session.
///
/// Entries keep the insertion order of their first appearance, which makes
/// every derived view (aggregate, order payload) deterministic. Lines
/// decremented back to 0 stay in place but are invisible through
/// [`entries`](Self::entries).
#[derive(Debug, Clone, Default)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current quantity for a product, 0 when absent.
    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.product_id == *id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Sets a quantity outright. Always succeeds; there is no failure mode.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == *id) {
            entry.quantity = quantity;
        } else {
            self.entries.push(CartEntry {
                product_id: id.clone(),
                quantity,
            });
        }
    }

    /// Applies a signed delta to the current quantity, floored at 0.
    pub fn adjust(&mut self, id: &ProductId, delta: i64) {
        let next = (i64::from(self.quantity(id)) + delta).clamp(0, i64::from(u32::MAX));
        self.set_quantity(id, next as u32);
    }

    /// One more of the product. The add-only UI affordance and the
    /// increment affordance are the same primitive.
    pub fn add(&mut self, id: &ProductId) {
        self.increment(id);
    }

    pub fn increment(&mut self, id: &ProductId) {
        self.adjust(id, 1);
    }

    pub fn decrement(&mut self, id: &ProductId) {
        self.adjust(id, -1);
    }

    /// What is actually in the cart: every line with quantity > 0, in
    /// insertion order. All aggregation goes through this view.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter().filter(|entry| entry.quantity > 0)
    }

    pub fn has_items(&self) -> bool {
        self.entries().next().is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Joins the cart against the catalog. Lines whose product no longer
    /// resolves (the catalog was replaced underneath an open cart) are
    /// skipped, not reported: a refresh racing an open cart is expected.
    pub fn aggregate(&self, catalog: &CatalogStore) -> CartSummary {
        let mut summary = CartSummary::default();
        for entry in self.entries() {
            if let Some(product) = catalog.find_by_id(&entry.product_id) {
                summary.total_items += entry.quantity;
                summary.total_price += product.price * u64::from(entry.quantity);
            }
        }
        summary
    }
}

//! Shopping Cart Domain Models

use crate::catalog::ProductId;
use serde::Serialize;

/// One cart line: a product reference and how many of it.
///
/// Quantity 0 is logically equivalent to absence;
/// [`CartState::entries`](super::CartState::entries) never yields such a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Aggregate view of the cart, joined against the current catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CartSummary {
    pub total_items: u32,
    pub total_price: u64,
}

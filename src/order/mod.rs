//! Order payload composition.

use crate::cart::CartState;
use crate::catalog::{CatalogStore, ProductId};
use serde::Serialize;

/// One line of the outbound order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

/// The payload handed to the host on checkout. Derived, never stored:
/// recomputed from cart and catalog at the moment of the trigger.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrderPayload {
    pub items: Vec<OrderItem>,
    pub total_price: u64,
}

/// Joins the cart against the catalog into an order payload.
///
/// Pure and infallible: entries whose product no longer resolves are
/// excluded from both `items` and `total_price`, and an empty cart yields
/// the empty payload. Items follow the cart's insertion order, and
/// `total_price` always equals the sum of `price * quantity` over the
/// emitted items.
pub fn compose(cart: &CartState, catalog: &CatalogStore) -> OrderPayload {
    let mut payload = OrderPayload::default();
    for entry in cart.entries() {
        let Some(product) = catalog.find_by_id(&entry.product_id) else {
            continue;
        };
        payload.total_price += product.price * u64::from(entry.quantity);
        payload.items.push(OrderItem {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: entry.quantity,
        });
    }
    payload
}

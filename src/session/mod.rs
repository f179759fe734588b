//! Storefront Session
//!
//! One user's storefront from fetch to checkout: owns the catalog, cart
//! and navigator, talks to the host through the bridge, and routes typed
//! renderer events into the core. All state mutation happens synchronously
//! inside [`StorefrontSession::handle`]; the only suspension point is the
//! catalog fetch.

use crate::bridge::HostBridge;
use crate::cart::{CartState, CartSummary};
use crate::catalog::{CatalogResponse, CatalogStore, ProductId};
use crate::nav::{CatalogNavigator, Screen};
use crate::order;
use crate::source::CatalogSource;
use uuid::Uuid;

/// Static message shown when the catalog cannot be loaded. Fetch and
/// schema failures are user-recoverable (reload), never fatal.
const CATALOG_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Renderer-boundary events, one per UI affordance. Dispatching an enum
/// instead of matching on markup keeps the core independent of the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SelectBrand(String),
    AddToCart(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Back,
    Checkout,
}

/// Session policies that observed behavior leaves open.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Empty the cart after handing an order to the host. Off by default:
    /// the host offers no acknowledgment, so a cleared cart cannot be
    /// restored if the order never arrives.
    pub clear_cart_on_checkout: bool,
}

/// One user's storefront state.
pub struct StorefrontSession<B: HostBridge> {
    session_id: String,
    catalog: CatalogStore,
    cart: CartState,
    navigator: CatalogNavigator,
    bridge: B,
    config: SessionConfig,
    error: Option<&'static str>,
}

impl<B: HostBridge> StorefrontSession<B> {
    /// Starts a session with an empty catalog and cart. Both host buttons
    /// start hidden; the catalog arrives with the first
    /// [`refresh`](Self::refresh).
    pub fn new(bridge: B, config: SessionConfig) -> Self {
        let session_id = Uuid::new_v4().simple().to_string();
        bridge.hide_main_button();
        bridge.hide_back_button();
        tracing::debug!(session = %session_id, "storefront session started");

        Self {
            session_id,
            catalog: CatalogStore::empty(),
            cart: CartState::new(),
            navigator: CatalogNavigator::new(),
            bridge,
            config,
            error: None,
        }
    }

    /// Fetches the catalog and installs it. On failure the previous
    /// catalog stays and a static error message becomes visible; there is
    /// no automatic retry. Overlapping refreshes resolve last-writer-wins.
    pub async fn refresh<S: CatalogSource>(&mut self, source: &S) {
        match source.fetch().await {
            Ok(raw) => self.apply_catalog(raw),
            Err(error) => {
                tracing::warn!(session = %self.session_id, %error, "catalog fetch failed");
                self.error = Some(CATALOG_ERROR_MESSAGE);
            }
        }
    }

    /// Normalizes a fetched response and replaces the catalog in a single
    /// assignment, then reconciles navigation and the main button against
    /// the new data. Malformed data is the same degraded state as a failed
    /// fetch: message up, old catalog kept.
    pub fn apply_catalog(&mut self, raw: CatalogResponse) {
        match CatalogStore::load(raw) {
            Ok(catalog) => {
                tracing::info!(
                    session = %self.session_id,
                    brands = catalog.brands().count(),
                    products = catalog.product_count(),
                    "catalog replaced"
                );
                self.catalog = catalog;
                self.error = None;
                self.navigator.reconcile(&self.catalog, &self.bridge);
                self.sync_main_button();
            }
            Err(error) => {
                tracing::warn!(session = %self.session_id, %error, "catalog rejected");
                self.error = Some(CATALOG_ERROR_MESSAGE);
            }
        }
    }

    /// Routes one renderer event into the core. Catalog and cart are
    /// always read together inside one invocation, never across two.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::SelectBrand(brand) => {
                self.navigator
                    .select_brand(&self.catalog, &brand, &self.bridge);
            }
            UiEvent::AddToCart(id) => {
                self.cart.add(&id);
                self.sync_main_button();
            }
            UiEvent::Increment(id) => {
                self.cart.increment(&id);
                self.sync_main_button();
            }
            UiEvent::Decrement(id) => {
                self.cart.decrement(&id);
                self.sync_main_button();
            }
            UiEvent::Back => self.navigator.go_back(&self.bridge),
            UiEvent::Checkout => self.checkout(),
        }
    }

    /// Composes the order and hands it to the host, exactly once per
    /// trigger. An empty cart sends nothing; the payload would be legal
    /// but useless downstream.
    fn checkout(&mut self) {
        let payload = order::compose(&self.cart, &self.catalog);
        if payload.items.is_empty() {
            // Nothing resolvable to sell: either an empty cart or one made
            // entirely of stale lines.
            tracing::debug!(session = %self.session_id, "checkout with nothing sellable ignored");
            return;
        }
        let serialized = match serde_json::to_string(&payload) {
            Ok(serialized) => serialized,
            Err(error) => {
                tracing::error!(session = %self.session_id, %error, "order serialization failed");
                return;
            }
        };

        self.bridge.send_data(&serialized);
        tracing::info!(
            session = %self.session_id,
            items = payload.items.len(),
            total_price = payload.total_price,
            "order sent to host"
        );

        if self.config.clear_cart_on_checkout {
            self.cart.clear();
            self.sync_main_button();
        }
    }

    /// Pushes the aggregate onto the host's primary action: the label
    /// embeds the current total, visible only while something is in the
    /// cart.
    fn sync_main_button(&self) {
        let summary = self.cart.aggregate(&self.catalog);
        if summary.total_items > 0 {
            self.bridge
                .set_main_button_label(&format!("Place order ({} RUB)", summary.total_price));
            self.bridge.show_main_button();
        } else {
            self.bridge.hide_main_button();
        }
    }

    // ---- reads for the renderer ----

    pub fn screen(&self) -> Screen<'_> {
        self.navigator.screen(&self.catalog)
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.cart.aggregate(&self.catalog)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeCommand, RecordingBridge};
    use crate::error::ShopError;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> CatalogResponse {
        serde_json::from_value(value).expect("wire shape")
    }

    fn acme_raw() -> CatalogResponse {
        raw(json!({
            "Acme": [
                { "id": 1, "name": "Widget", "price": 100 },
                { "id": 2, "name": "Gadget", "price": 40 }
            ]
        }))
    }

    fn session_with_catalog() -> StorefrontSession<RecordingBridge> {
        let mut session = StorefrontSession::new(RecordingBridge::new(), SessionConfig::default());
        session.apply_catalog(acme_raw());
        session
    }

    #[test]
    fn new_session_hides_both_buttons() {
        let session = StorefrontSession::new(RecordingBridge::new(), SessionConfig::default());

        assert_eq!(
            session.bridge().commands(),
            vec![BridgeCommand::HideMainButton, BridgeCommand::HideBackButton]
        );
    }

    #[test]
    fn cart_mutations_drive_main_button() {
        let mut session = session_with_catalog();

        session.handle(UiEvent::AddToCart(ProductId::from(1)));

        let commands = session.bridge().commands();
        assert!(commands.contains(&BridgeCommand::SetMainButtonLabel(
            "Place order (100 RUB)".to_string()
        )));
        assert_eq!(commands.last(), Some(&BridgeCommand::ShowMainButton));

        session.handle(UiEvent::Decrement(ProductId::from(1)));
        assert_eq!(
            session.bridge().commands().last(),
            Some(&BridgeCommand::HideMainButton)
        );
    }

    #[test]
    fn checkout_sends_exactly_once() {
        let mut session = session_with_catalog();
        session.handle(UiEvent::AddToCart(ProductId::from(1)));

        session.handle(UiEvent::Checkout);

        let payloads = session.bridge().sent_payloads();
        assert_eq!(payloads.len(), 1);
        let order: serde_json::Value = serde_json::from_str(&payloads[0]).expect("json payload");
        assert_eq!(order["total_price"], 100);
        assert_eq!(order["items"][0]["name"], "Widget");

        // Default policy keeps the cart; a second trigger sends again.
        assert_eq!(session.cart_summary().total_items, 1);
        session.handle(UiEvent::Checkout);
        assert_eq!(session.bridge().sent_payloads().len(), 2);
    }

    #[test]
    fn empty_checkout_sends_nothing() {
        let mut session = session_with_catalog();

        session.handle(UiEvent::Checkout);

        assert!(session.bridge().sent_payloads().is_empty());
    }

    #[test]
    fn clear_policy_empties_cart_after_send() {
        let mut session = StorefrontSession::new(
            RecordingBridge::new(),
            SessionConfig {
                clear_cart_on_checkout: true,
            },
        );
        session.apply_catalog(acme_raw());
        session.handle(UiEvent::AddToCart(ProductId::from(1)));

        session.handle(UiEvent::Checkout);

        assert_eq!(session.bridge().sent_payloads().len(), 1);
        assert_eq!(session.cart_summary(), CartSummary::default());
        assert_eq!(
            session.bridge().commands().last(),
            Some(&BridgeCommand::HideMainButton)
        );
    }

    #[test]
    fn malformed_catalog_keeps_previous_and_sets_message() {
        let mut session = session_with_catalog();
        assert!(session.error_message().is_none());

        session.apply_catalog(raw(json!({ "Acme": [{ "name": "NoId", "price": 1 }] })));

        assert!(session.error_message().is_some());
        assert_eq!(session.catalog().product_count(), 2);
    }

    #[test]
    fn replace_reconciles_navigation_and_button() {
        let mut session = session_with_catalog();
        session.handle(UiEvent::SelectBrand("Acme".to_string()));
        session.handle(UiEvent::AddToCart(ProductId::from(1)));

        session.apply_catalog(raw(json!({
            "Other": [{ "id": 9, "name": "Anvil", "price": 50 }]
        })));

        assert!(matches!(session.screen(), Screen::BrandList { .. }));
        assert_eq!(session.cart_summary(), CartSummary::default());
        assert_eq!(
            session.bridge().commands().last(),
            Some(&BridgeCommand::HideMainButton)
        );
        assert!(session.error_message().is_none());
    }

    struct StaticSource(serde_json::Value);

    impl CatalogSource for StaticSource {
        async fn fetch(&self) -> Result<CatalogResponse, ShopError> {
            Ok(serde_json::from_value(self.0.clone()).expect("wire shape"))
        }
    }

    struct FailingSource;

    impl CatalogSource for FailingSource {
        async fn fetch(&self) -> Result<CatalogResponse, ShopError> {
            Err(ShopError::Fetch("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_message() {
        let mut session = StorefrontSession::new(RecordingBridge::new(), SessionConfig::default());

        session.refresh(&FailingSource).await;

        assert_eq!(session.error_message(), Some(CATALOG_ERROR_MESSAGE));
        assert!(session.catalog().is_empty());

        // A later successful fetch clears the message.
        session
            .refresh(&StaticSource(json!({
                "Acme": [{ "id": 1, "name": "Widget", "price": 100 }]
            })))
            .await;

        assert!(session.error_message().is_none());
        assert_eq!(session.catalog().product_count(), 1);
    }
}

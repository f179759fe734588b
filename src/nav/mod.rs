//! Two-level catalog navigation.

use crate::bridge::HostBridge;
use crate::catalog::{CatalogStore, Product};

/// Where the user currently is: the brand list, or one brand's products.
/// There is no deeper nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationView {
    BrandList,
    BrandDetail(String),
}

/// What the renderer should draw for the current view.
#[derive(Debug)]
pub enum Screen<'a> {
    BrandList { brands: Vec<&'a str> },
    BrandDetail { brand: &'a str, products: &'a [Product] },
}

/// View controller over the catalog hierarchy.
///
/// Every actual transition also drives the host's back-affordance
/// visibility (visible iff a brand is open), so state and affordance
/// cannot drift apart.
#[derive(Debug)]
pub struct CatalogNavigator {
    view: NavigationView,
}

impl Default for CatalogNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogNavigator {
    pub fn new() -> Self {
        Self {
            view: NavigationView::BrandList,
        }
    }

    pub fn current_view(&self) -> &NavigationView {
        &self.view
    }

    /// Opens a brand's product list. Selecting a brand the catalog no
    /// longer has (a stale tap right after a refresh) is a silent no-op.
    pub fn select_brand(&mut self, catalog: &CatalogStore, brand: &str, bridge: &dyn HostBridge) {
        if !catalog.contains_brand(brand) {
            tracing::debug!(brand, "ignoring selection of unknown brand");
            return;
        }
        self.view = NavigationView::BrandDetail(brand.to_string());
        bridge.show_back_button();
    }

    /// Returns to the brand list. Idempotent: already being there changes
    /// nothing and issues no bridge call.
    pub fn go_back(&mut self, bridge: &dyn HostBridge) {
        if self.view == NavigationView::BrandList {
            return;
        }
        self.view = NavigationView::BrandList;
        bridge.hide_back_button();
    }

    /// Re-checks the selection after a catalog replace: a brand that
    /// vanished sends the user back to the brand list.
    pub fn reconcile(&mut self, catalog: &CatalogStore, bridge: &dyn HostBridge) {
        let vanished = match &self.view {
            NavigationView::BrandDetail(brand) if !catalog.contains_brand(brand) => {
                tracing::debug!(brand, "selected brand vanished from catalog");
                true
            }
            _ => false,
        };
        if vanished {
            self.go_back(bridge);
        }
    }

    /// Projects the catalog data the current view exposes to the renderer.
    pub fn screen<'a>(&'a self, catalog: &'a CatalogStore) -> Screen<'a> {
        match &self.view {
            NavigationView::BrandList => Screen::BrandList {
                brands: catalog.brands().collect(),
            },
            NavigationView::BrandDetail(brand) => Screen::BrandDetail {
                brand,
                products: catalog.products_of(brand),
            },
        }
    }
}

//! HTTP API for the catalog service.
//!
//! Serves the normalized product document the storefront fetches on
//! startup, plus a liveness route.

use crate::catalog::CatalogStore;
use crate::source::{CatalogSource, FileCatalogSource};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Server-side state: the document source behind the products endpoint.
pub struct AppState {
    pub source: FileCatalogSource,
}

/// Creates routes for catalog-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(health))
        .route("/api/products", get(get_products))
}

/// Endpoint: GET /
/// Liveness check for the deployment.
async fn health() -> impl IntoResponse {
    Json(json!({ "message": "Catalog service is running." }))
}

/// Endpoint: GET /api/products
/// Serves the normalized brand -> products document. The raw file is
/// validated on every request, so a malformed edit surfaces here instead
/// of inside clients.
async fn get_products(State(state): State<SharedState>) -> Response {
    let raw = match state.source.fetch().await {
        Ok(raw) => raw,
        Err(error) => return catalog_error(error.to_string()),
    };

    match CatalogStore::load(raw) {
        Ok(catalog) => Json(catalog.document()).into_response(),
        Err(error) => catalog_error(error.to_string()),
    }
}

fn catalog_error(details: String) -> Response {
    tracing::error!(%details, "failed to serve catalog");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "could not fetch catalog", "details": details })),
    )
        .into_response()
}

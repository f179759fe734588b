//! Routing module for the catalog service

use crate::api::{self, SharedState};
use axum::Router;
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState, assets_dir: &Path) -> Router {
    // Middleware: CORS (the page is served from the host's webview origin)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::routes())
        // The storefront page itself; the service only hosts the files.
        .nest_service("/webapp", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

use std::sync::Arc;

use storefront_webapp::api::AppState;
use storefront_webapp::config;
use storefront_webapp::router::create_app_router;
use storefront_webapp::source::FileCatalogSource;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state and router
    let source = FileCatalogSource::new(&config.catalog_path, config.catalog_ttl);
    let state = Arc::new(AppState { source });
    let app = create_app_router(state, &config.assets_dir);

    tracing::info!(
        addr = %config.bind_addr,
        catalog = %config.catalog_path.display(),
        "catalog service listening"
    );

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

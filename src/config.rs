//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Settings for the catalog service binary. Everything has a default so a
/// bare `cargo run` serves the bundled demo catalog.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub catalog_ttl: Duration,
    pub assets_dir: PathBuf,
    pub log_level: String,
}

/// Loads configuration, reading a `.env` file first when present.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Core parsing, decoupled from the process environment so tests can feed
/// a plain map.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

    let bind_addr = or_default("SHOP_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "SHOP_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let ttl_secs = or_default("SHOP_CATALOG_TTL_SECS", "300")
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "SHOP_CATALOG_TTL_SECS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(AppConfig {
        bind_addr,
        catalog_path: PathBuf::from(or_default("SHOP_CATALOG_PATH", "data/products.json")),
        catalog_ttl: Duration::from_secs(ttl_secs),
        assets_dir: PathBuf::from(or_default("SHOP_WEBAPP_DIR", "webapp")),
        log_level: or_default("SHOP_LOG_LEVEL", "info"),
    })
}

//! Housing Dashboard Server
//!
//! Run with: cargo run --bin housing-dashboard
//!
//! # Configuration
//!
//! Read from `config.toml` in the usual locations, then overridden by:
//! - `HOUSING_DASHBOARD_API_URL`: Housing API base URL (default: http://localhost:10000)
//! - `HOUSING_DASHBOARD_TIMEOUT_SECS`: Request timeout (default: none)
//! - `HOUSING_DASHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HOUSING_DASHBOARD_PORT`: Port to listen on (default: 8084)
//! - `HOUSING_DASHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `HOUSING_DASHBOARD_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Full filter directive, wins over the level above

use housing_dashboard::client::{HttpApiClient, HttpApiConfig};
use housing_dashboard::config::Config;
use housing_dashboard::server::{serve, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    housing_dashboard::logging::init(&loaded.config.logging);
    loaded.report();
    let config = loaded.config;

    tracing::info!("Starting housing dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend API: {}", config.backend.url);

    let api = Arc::new(HttpApiClient::new(HttpApiConfig::from(&config.backend))?);

    match api.health_check().await {
        Ok(_) => tracing::info!("Backend connection verified"),
        Err(e) => tracing::warn!("Backend not available: {} (charts will stay empty)", e),
    }

    serve(AppState::new(api), &config.server).await?;

    tracing::info!("Housing dashboard stopped");
    Ok(())
}

//! Dashboard Front End
//!
//! Serves the dashboard page, built with Axum. Each request runs the
//! dashboard controller against the backend and returns the rendered page.
//!
//! # Endpoints
//!
//! - `GET /` - Overview tab (`?tab=analysis` / `?tab=models` for the others)
//! - `POST /predict` - Prediction form submission
//! - `GET /health/live` - Liveness check
//! - `GET /health` - Backend reachability
//!
//! # Example
//!
//! ```rust,ignore
//! use housing_dashboard::client::{HttpApiClient, HttpApiConfig};
//! use housing_dashboard::config::ServerConfig;
//! use housing_dashboard::server::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpApiClient::new(HttpApiConfig::default())?);
//!     serve(AppState::new(api), &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::client::DashboardApi;
use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router<A: DashboardApi + 'static>(state: AppState<A>) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::liveness))
        .route("/", get(routes::full_health::<A>));

    Router::new()
        .route("/", get(routes::index::<A>))
        .route("/predict", post(routes::predict::<A>))
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Start the dashboard server
pub async fn serve<A: DashboardApi + 'static>(
    state: AppState<A>,
    config: &ServerConfig,
) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Housing dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Housing dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

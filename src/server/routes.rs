//! Dashboard Routes
//!
//! - GET /?tab=<tab> - Render the dashboard with a tab active
//! - POST /predict - Submit the prediction form
//! - GET /health/live - Liveness check
//! - GET /health - Backend reachability

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form, Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::ServerResult;
use super::state::AppState;
use crate::client::DashboardApi;
use crate::dashboard::{Dashboard, PredictionForm};
use crate::page::{render_html, Document, Tab};

#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub tab: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

fn dashboard_for<A: DashboardApi>(state: &AppState<A>) -> (Dashboard<A, Document>, Arc<Document>) {
    let doc = Arc::new(Document::new());
    let dashboard = Dashboard::new(Arc::clone(&state.api), Arc::clone(&doc));
    (dashboard, doc)
}

/// GET /
///
/// Runs the page-load sequence, then the requested tab switch, and returns
/// the rendered page. Every request fetches fresh data.
pub async fn index<A: DashboardApi + 'static>(
    State(state): State<Arc<AppState<A>>>,
    Query(params): Query<IndexParams>,
) -> ServerResult<Html<String>> {
    let tab = match params.tab.as_deref() {
        Some(t) => t.parse::<Tab>()?,
        None => Tab::Overview,
    };

    let (dashboard, doc) = dashboard_for(&state);
    dashboard.init().await;
    dashboard.switch_tab(tab).await;

    Ok(Html(render_html(&doc, Utc::now())))
}

/// POST /predict
///
/// Renders the models tab with the prediction outcome. A failed prediction
/// still answers 200 with the inline error message.
pub async fn predict<A: DashboardApi + 'static>(
    State(state): State<Arc<AppState<A>>>,
    Form(form): Form<PredictionForm>,
) -> Html<String> {
    let (dashboard, doc) = dashboard_for(&state);
    dashboard.init().await;
    dashboard.switch_tab(Tab::Models).await;
    let _ = dashboard.make_prediction(&form).await;

    Html(render_html(&doc, Utc::now()))
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health<A: DashboardApi + 'static>(
    State(state): State<Arc<AppState<A>>>,
) -> Json<HealthResponse> {
    let backend_ok = match state.api.summary().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Backend health check failed");
            false
        }
    };

    Json(HealthResponse {
        status: (if backend_ok { "healthy" } else { "degraded" }).to_string(),
        backend: (if backend_ok { "ok" } else { "unreachable" }).to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

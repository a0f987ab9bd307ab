//! # Housing Dashboard
//!
//! Client and front end for the housing price prediction API. Fetches
//! precomputed statistics and model outputs, reshapes them into Plotly
//! figures and serves them as a single-page dashboard with a prediction form.
//!
//! ## Modules
//!
//! - [`client`]: Typed HTTP client for the housing API
//! - [`charts`]: Chart builders on `plotly` and the drawn [`charts::Figure`]
//! - [`page`]: Page contract and the in-memory [`page::Document`]
//! - [`dashboard`]: The dashboard controller
//! - [`server`]: Front-end server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use housing_dashboard::client::{HttpApiClient, HttpApiConfig};
//! use housing_dashboard::dashboard::Dashboard;
//! use housing_dashboard::page::{render_html, Document, Tab};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpApiClient::new(HttpApiConfig::default())?);
//!     let doc = Arc::new(Document::new());
//!     let dashboard = Dashboard::new(api, Arc::clone(&doc));
//!
//!     // Summary counters and overview charts
//!     dashboard.init().await;
//!
//!     // Scatter and location charts
//!     dashboard.switch_tab(Tab::Analysis).await;
//!
//!     let html = render_html(&doc, chrono::Utc::now());
//!     println!("{} bytes rendered", html.len());
//!
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod format;
pub mod logging;
pub mod page;
pub mod server;

// Re-export top-level types for convenience
pub use charts::Figure;

pub use client::{ClientError, ClientResult, DashboardApi, HttpApiClient, HttpApiConfig};

pub use config::{
    BackendConfig, Config, ConfigError, LoadedConfig, LoggingConfig, ServerConfig,
    generate_default_config,
};

pub use dashboard::{Dashboard, PredictionForm};

pub use page::{ChartSlot, Document, Page, Tab, TabError};

pub use server::{build_router, serve, AppState, ServerError};

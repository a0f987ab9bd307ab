//! Housing API Client
//!
//! Typed access to the housing price backend.
//!
//! # Endpoints
//!
//! ## Data
//! - `GET /api/data/summary` - Record count and averages
//! - `GET /api/data/distribution` - Price histogram bins
//! - `GET /api/data/correlation` - Feature correlation with price
//! - `GET /api/data/geographic` - One point per property
//! - `GET /api/data/scatter/{feature}` - Feature vs price pairs
//!
//! ## Models
//! - `GET /api/models/performance` - R² and MSE per model
//! - `GET /api/models/feature_importance` - Random forest importances
//! - `POST /api/predict` - Predict price for a feature vector

pub mod dto;
mod error;
mod http;

pub use dto::*;
pub use error::{ClientError, ClientResult};
pub use http::{HttpApiClient, HttpApiConfig};

use async_trait::async_trait;

pub const SUMMARY_PATH: &str = "/api/data/summary";
pub const DISTRIBUTION_PATH: &str = "/api/data/distribution";
pub const CORRELATION_PATH: &str = "/api/data/correlation";
pub const GEOGRAPHIC_PATH: &str = "/api/data/geographic";
pub const SCATTER_PATH: &str = "/api/data/scatter";
pub const PERFORMANCE_PATH: &str = "/api/models/performance";
pub const FEATURE_IMPORTANCE_PATH: &str = "/api/models/feature_importance";
pub const PREDICT_PATH: &str = "/api/predict";

/// Read and predict operations the dashboard needs from the backend
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn summary(&self) -> ClientResult<SummaryStats>;

    async fn distribution(&self) -> ClientResult<Vec<DistributionBin>>;

    async fn correlation(&self) -> ClientResult<Vec<CorrelationEntry>>;

    async fn geographic(&self) -> ClientResult<Vec<GeoPoint>>;

    /// Scatter pairs for a raw column name such as `house_age`
    async fn scatter(&self, feature: &str) -> ClientResult<ScatterSeries>;

    async fn model_performance(&self) -> ClientResult<ModelPerformance>;

    async fn feature_importance(&self) -> ClientResult<Vec<FeatureImportanceEntry>>;

    async fn predict(&self, input: &PredictionInput) -> ClientResult<PredictionResult>;
}

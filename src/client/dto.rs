//! Data Transfer Objects
//!
//! Payloads exchanged with the housing price API.
//! Every response type is consumed once per render and never retained.

use serde::{Deserialize, Serialize};

// ============================================
// SUMMARY
// ============================================

/// GET /api/data/summary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryStats {
    pub total_records: u64,
    pub price_stats: PriceStats,
    pub feature_stats: FeatureStats,
}

/// Price statistics, in 10000 NTD per Ping
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceStats {
    pub mean: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
}

/// Feature averages
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureStats {
    pub avg_house_age: f64,
    pub avg_distance_to_mrt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_convenience_stores: Option<f64>,
}

// ============================================
// DATA ENDPOINTS
// ============================================

/// One histogram bin from GET /api/data/distribution
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistributionBin {
    pub bin_start: f64,
    pub bin_end: f64,
    pub count: u64,
}

impl DistributionBin {
    pub fn midpoint(&self) -> f64 {
        (self.bin_start + self.bin_end) / 2.0
    }
}

/// Correlation of one feature with price
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorrelationEntry {
    pub feature: String,
    pub correlation: f64,
}

/// One property from GET /api/data/geographic
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    pub house_age: f64,
    pub distance_to_mrt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convenience_stores: Option<u32>,
}

/// GET /api/data/scatter/{feature}
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScatterSeries {
    /// Display name of the feature (e.g. "Distance To Mrt")
    pub feature: String,
    pub data: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

// ============================================
// MODEL ENDPOINTS
// ============================================

/// GET /api/models/performance
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelPerformance {
    pub linear_regression: ModelMetrics,
    pub random_forest: ModelMetrics,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ModelMetrics {
    pub r2: f64,
    pub mse: f64,
}

/// One entry from GET /api/models/feature_importance (percent)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureImportanceEntry {
    pub feature: String,
    pub importance: f64,
}

// ============================================
// PREDICTION
// ============================================

/// POST /api/predict request body
///
/// Fields that failed to parse hold NaN (or `None` for the store count) and
/// serialize as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PredictionInput {
    pub transaction_date: f64,
    pub house_age: f64,
    pub distance_to_mrt: f64,
    pub num_convenience_stores: Option<i64>,
    pub latitude: f64,
    pub longitude: f64,
}

/// POST /api/predict response body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionResult {
    pub linear_regression_prediction: f64,
    pub random_forest_prediction: f64,
    /// Echo of the request as the backend understood it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_features: Option<serde_json::Value>,
}

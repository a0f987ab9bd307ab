//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use housing_dashboard::client::*;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// In-process backend that serves canned payloads and records every call
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<String>>,
    last_input: Mutex<Option<PredictionInput>>,
    chart_barrier: Mutex<Option<Arc<Barrier>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make one endpoint (`summary`, `geographic`, `scatter:house_age`, ...) fail
    pub fn fail(&self, call: &str) {
        self.failing.lock().unwrap().insert(call.to_string());
    }

    pub fn recover(&self, call: &str) {
        self.failing.lock().unwrap().remove(call);
    }

    /// Hold every chart endpoint until `n` chart requests are in flight
    /// together. Summary and predict are never held.
    pub fn hold_charts(&self, n: usize) {
        *self.chart_barrier.lock().unwrap() = Some(Arc::new(Barrier::new(n)));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn last_input(&self) -> Option<PredictionInput> {
        *self.last_input.lock().unwrap()
    }

    async fn chart(&self, call: &str) -> ClientResult<()> {
        let barrier = self.chart_barrier.lock().unwrap().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }
        self.record(call)
    }

    fn record(&self, call: &str) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.failing.lock().unwrap().contains(call) {
            return Err(ClientError::Status {
                status: 500,
                message: format!("{} failed", call),
            });
        }
        Ok(())
    }
}

pub fn sample_summary() -> SummaryStats {
    SummaryStats {
        total_records: 414,
        price_stats: PriceStats {
            mean: 37.98,
            median: Some(38.45),
            min: Some(7.6),
            max: Some(117.5),
            std: Some(13.6),
        },
        feature_stats: FeatureStats {
            avg_house_age: 17.71,
            avg_distance_to_mrt: 1083.89,
            avg_convenience_stores: Some(4.09),
        },
    }
}

pub fn sample_points() -> Vec<GeoPoint> {
    vec![
        GeoPoint {
            latitude: 24.98298,
            longitude: 121.54024,
            price: 37.9,
            house_age: 32.0,
            distance_to_mrt: 84.87882,
            convenience_stores: Some(10),
        },
        GeoPoint {
            latitude: 24.98034,
            longitude: 121.53951,
            price: 42.2,
            house_age: 19.5,
            distance_to_mrt: 306.5947,
            convenience_stores: Some(9),
        },
    ]
}

#[async_trait]
impl DashboardApi for MockApi {
    async fn summary(&self) -> ClientResult<SummaryStats> {
        self.record("summary")?;
        Ok(sample_summary())
    }

    async fn distribution(&self) -> ClientResult<Vec<DistributionBin>> {
        self.chart("distribution").await?;
        Ok(vec![
            DistributionBin { bin_start: 7.6, bin_end: 12.6, count: 12 },
            DistributionBin { bin_start: 12.6, bin_end: 17.6, count: 20 },
        ])
    }

    async fn correlation(&self) -> ClientResult<Vec<CorrelationEntry>> {
        self.chart("correlation").await?;
        Ok(vec![
            CorrelationEntry { feature: "Distance To Mrt".into(), correlation: -0.67 },
            CorrelationEntry { feature: "Convenience Stores".into(), correlation: 0.57 },
        ])
    }

    async fn geographic(&self) -> ClientResult<Vec<GeoPoint>> {
        self.chart("geographic").await?;
        Ok(sample_points())
    }

    async fn scatter(&self, feature: &str) -> ClientResult<ScatterSeries> {
        self.chart(&format!("scatter:{}", feature)).await?;
        Ok(ScatterSeries {
            feature: feature.replace('_', " "),
            data: vec![ScatterPoint { x: 1.0, y: 30.0 }, ScatterPoint { x: 2.0, y: 40.0 }],
        })
    }

    async fn model_performance(&self) -> ClientResult<ModelPerformance> {
        self.chart("model_performance").await?;
        Ok(ModelPerformance {
            linear_regression: ModelMetrics { r2: 0.58, mse: 80.1 },
            random_forest: ModelMetrics { r2: 0.81, mse: 36.4 },
        })
    }

    async fn feature_importance(&self) -> ClientResult<Vec<FeatureImportanceEntry>> {
        self.chart("feature_importance").await?;
        Ok(vec![
            FeatureImportanceEntry { feature: "Distance To Mrt".into(), importance: 55.1 },
            FeatureImportanceEntry { feature: "House Age".into(), importance: 17.3 },
        ])
    }

    async fn predict(&self, input: &PredictionInput) -> ClientResult<PredictionResult> {
        *self.last_input.lock().unwrap() = Some(*input);
        self.record("predict")?;
        Ok(PredictionResult {
            linear_regression_prediction: 35.2,
            random_forest_prediction: 38.7,
            input_features: None,
        })
    }
}

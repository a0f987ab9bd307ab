//! HTTP implementation of [`DashboardApi`] over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::{ClientError, ClientResult};
use super::*;
use crate::config::BackendConfig;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL for the API (e.g., "http://localhost:10000")
    pub base_url: String,
    /// Request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for HttpApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:10000".to_string(),
            request_timeout: None,
        }
    }
}

impl From<&BackendConfig> for HttpApiConfig {
    fn from(config: &BackendConfig) -> Self {
        Self {
            base_url: config.url.clone(),
            request_timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Housing API client. No retries: each call is exactly one request.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    config: HttpApiConfig,
}

impl HttpApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: HttpApiConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let config = HttpApiConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ..config
        };

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &HttpApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Check that the backend answers the summary endpoint
    pub async fn health_check(&self) -> ClientResult<()> {
        let response = self
            .client
            .get(self.url(SUMMARY_PATH))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Unavailable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Unavailable(format!(
                "summary endpoint returned {}",
                response.status()
            )))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DashboardApi for HttpApiClient {
    async fn summary(&self) -> ClientResult<SummaryStats> {
        self.get_json(SUMMARY_PATH).await
    }

    async fn distribution(&self) -> ClientResult<Vec<DistributionBin>> {
        self.get_json(DISTRIBUTION_PATH).await
    }

    async fn correlation(&self) -> ClientResult<Vec<CorrelationEntry>> {
        self.get_json(CORRELATION_PATH).await
    }

    async fn geographic(&self) -> ClientResult<Vec<GeoPoint>> {
        self.get_json(GEOGRAPHIC_PATH).await
    }

    async fn scatter(&self, feature: &str) -> ClientResult<ScatterSeries> {
        let path = format!("{}/{}", SCATTER_PATH, urlencoding::encode(feature));
        self.get_json(&path).await
    }

    async fn model_performance(&self) -> ClientResult<ModelPerformance> {
        self.get_json(PERFORMANCE_PATH).await
    }

    async fn feature_importance(&self) -> ClientResult<Vec<FeatureImportanceEntry>> {
        self.get_json(FEATURE_IMPORTANCE_PATH).await
    }

    async fn predict(&self, input: &PredictionInput) -> ClientResult<PredictionResult> {
        tracing::debug!(path = PREDICT_PATH, "POST");
        let response = self
            .client
            .post(self.url(PREDICT_PATH))
            .json(input)
            .send()
            .await?;
        Self::decode(PREDICT_PATH, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:10000");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = HttpApiClient::new(HttpApiConfig {
            base_url: "http://example.test/".to_string(),
            request_timeout: None,
        })
        .unwrap();

        assert_eq!(client.url(SUMMARY_PATH), "http://example.test/api/data/summary");
    }

    #[test]
    fn test_from_backend_config() {
        let backend = BackendConfig {
            url: "http://api:1".to_string(),
            request_timeout_secs: Some(3),
        };
        let config = HttpApiConfig::from(&backend);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    }
}

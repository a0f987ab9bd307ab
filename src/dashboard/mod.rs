//! Dashboard Controller
//!
//! Owns the page's interactive behavior: initial load, tab switching and
//! prediction. Every chart loader fetches one endpoint, builds a figure and
//! draws it; a failed loader is logged and its container is left as it was.
//!
//! ## Flow
//!
//! 1. `init` renders the summary counters, then the overview charts
//! 2. `switch_tab` activates a tab and loads that tab's charts, every time
//! 3. `make_prediction` posts the form and renders results or an error
//!
//! Charts within a batch load concurrently and the batch completes when all
//! of them have settled. Nothing is cached and nothing is retried.

mod form;
mod render;

pub use form::{parse_float, parse_int, PredictionForm};
pub use render::{
    format_price, prediction_error_html, prediction_results_html, summary_counters,
    PREDICTION_ERROR_MESSAGE,
};

use std::sync::Arc;

use plotly::Plot;

use crate::charts::builders;
use crate::client::{ClientResult, DashboardApi, PredictionResult};
use crate::page::{
    ChartSlot, Page, Tab, AVG_AGE_ID, AVG_DISTANCE_ID, AVG_PRICE_ID, PREDICTION_RESULTS_ID,
    TOTAL_RECORDS_ID,
};

/// Binds an API to a page
pub struct Dashboard<A, P> {
    api: Arc<A>,
    page: Arc<P>,
}

impl<A, P> Clone for Dashboard<A, P> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            page: Arc::clone(&self.page),
        }
    }
}

impl<A: DashboardApi, P: Page> Dashboard<A, P> {
    pub fn new(api: Arc<A>, page: Arc<P>) -> Self {
        Self { api, page }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial page load
    pub async fn init(&self) {
        tracing::debug!("Initializing dashboard");
        self.load_summary_data().await;
        self.load_overview_charts().await;
    }

    /// Activate a tab and (re)load its charts
    pub async fn switch_tab(&self, tab: Tab) {
        tracing::debug!(tab = %tab, "Switching tab");
        self.page.activate_tab(tab);
        self.load_tab_data(tab).await;
    }

    /// Load the charts of one tab. The overview tab is loaded by `init`.
    pub async fn load_tab_data(&self, tab: Tab) {
        match tab {
            Tab::Analysis => self.load_analysis_charts().await,
            Tab::Models => self.load_model_charts().await,
            Tab::Overview => {}
        }
    }

    pub async fn load_summary_data(&self) {
        match self.api.summary().await {
            Ok(summary) => {
                let [records, price, age, distance] = summary_counters(&summary);
                self.page.set_text(TOTAL_RECORDS_ID, &records);
                self.page.set_text(AVG_PRICE_ID, &price);
                self.page.set_text(AVG_AGE_ID, &age);
                self.page.set_text(AVG_DISTANCE_ID, &distance);
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Error loading summary data");
            }
        }
    }

    pub async fn load_overview_charts(&self) {
        tokio::join!(
            self.load_price_distribution(),
            self.load_correlation_chart(),
            self.load_geographic_chart()
        );
    }

    pub async fn load_analysis_charts(&self) {
        tokio::join!(
            self.load_scatter_chart(ChartSlot::DistanceScatter),
            self.load_scatter_chart(ChartSlot::AgeScatter),
            self.load_scatter_chart(ChartSlot::StoresScatter),
            self.load_location_analysis()
        );
    }

    pub async fn load_model_charts(&self) {
        tokio::join!(self.load_model_performance(), self.load_feature_importance());
    }

    pub async fn load_price_distribution(&self) {
        let result = self.api.distribution().await;
        self.render_chart(ChartSlot::PriceDistribution, result, |bins| {
            builders::price_distribution(bins)
        });
    }

    pub async fn load_correlation_chart(&self) {
        let result = self.api.correlation().await;
        self.render_chart(ChartSlot::Correlation, result, |entries| {
            builders::correlation(entries)
        });
    }

    pub async fn load_geographic_chart(&self) {
        let result = self.api.geographic().await;
        self.render_chart(ChartSlot::Geographic, result, |points| {
            builders::geographic_map(points)
        });
    }

    /// Load one of the three scatter charts. Slots without a scatter
    /// feature are ignored.
    pub async fn load_scatter_chart(&self, slot: ChartSlot) {
        let Some(feature) = slot.scatter_feature() else {
            tracing::warn!(chart = %slot, "Not a scatter chart");
            return;
        };
        let result = self.api.scatter(feature).await;
        self.render_chart(slot, result, builders::scatter);
    }

    pub async fn load_location_analysis(&self) {
        let result = self.api.geographic().await;
        self.render_chart(ChartSlot::LocationAnalysis, result, |points| {
            builders::location_analysis(points)
        });
    }

    pub async fn load_model_performance(&self) {
        let result = self.api.model_performance().await;
        self.render_chart(ChartSlot::ModelPerformance, result, builders::model_performance);
    }

    pub async fn load_feature_importance(&self) {
        let result = self.api.feature_importance().await;
        self.render_chart(ChartSlot::FeatureImportance, result, |entries| {
            builders::feature_importance(entries)
        });
    }

    /// Submit the form and render the outcome into the results area
    ///
    /// Failures replace the results with an inline error message; the
    /// error is still returned for callers that want it.
    pub async fn make_prediction(&self, form: &PredictionForm) -> ClientResult<PredictionResult> {
        let input = form.to_input();

        match self.api.predict(&input).await {
            Ok(result) => {
                tracing::info!(
                    linear = result.linear_regression_prediction,
                    forest = result.random_forest_prediction,
                    "Prediction received"
                );
                self.page
                    .set_html(PREDICTION_RESULTS_ID, prediction_results_html(&input, &result));
                Ok(result)
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Error making prediction");
                self.page.set_html(PREDICTION_RESULTS_ID, prediction_error_html());
                Err(e)
            }
        }
    }

    fn render_chart<T>(
        &self,
        slot: ChartSlot,
        result: ClientResult<T>,
        build: impl FnOnce(&T) -> Plot,
    ) {
        match result {
            Ok(payload) => {
                self.page.plot(slot, build(&payload));
                tracing::debug!(chart = %slot, "Chart rendered");
            }
            Err(e) => {
                tracing::error!(chart = %slot, kind = e.kind(), error = %e, "Error loading chart");
            }
        }
    }
}

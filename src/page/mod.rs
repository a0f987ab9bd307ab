//! Page Contract
//!
//! The dashboard never touches markup directly. Everything it writes goes
//! through [`Page`], keyed by the element ids the host page provides:
//!
//! - Summary counters: `total-records`, `avg-price`, `avg-age`, `avg-distance`
//! - Tab buttons `.tab-button[data-tab=<tab>]` and panels `#<tab>-tab`
//! - One container per chart (see [`ChartSlot::container_id`])
//! - The `prediction-form` and its `prediction-results` area

mod document;
mod html;

pub use document::Document;
pub use html::{escape_html, render_html};

use std::fmt;
use std::str::FromStr;

use plotly::Plot;

pub const TOTAL_RECORDS_ID: &str = "total-records";
pub const AVG_PRICE_ID: &str = "avg-price";
pub const AVG_AGE_ID: &str = "avg-age";
pub const AVG_DISTANCE_ID: &str = "avg-distance";
pub const PREDICTION_FORM_ID: &str = "prediction-form";
pub const PREDICTION_RESULTS_ID: &str = "prediction-results";

/// Write access to the host page
///
/// Methods take `&self` so concurrent loaders can share one page.
pub trait Page: Send + Sync {
    /// Replace the text content of an element
    fn set_text(&self, id: &str, text: &str);

    /// Replace the inner HTML of an element
    fn set_html(&self, id: &str, html: String);

    /// Draw (or redraw) a chart into its container
    fn plot(&self, slot: ChartSlot, plot: Plot);

    /// Mark one tab button and panel active, every other one inactive
    fn activate_tab(&self, tab: Tab);
}

/// The three logical views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Analysis,
    Models,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Analysis, Tab::Models];

    /// Value of the button's `data-tab` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Analysis => "analysis",
            Tab::Models => "models",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Analysis => "Analysis",
            Tab::Models => "Models",
        }
    }

    /// Id of the tab's content panel
    pub fn panel_id(&self) -> String {
        format!("{}-tab", self.as_str())
    }

    /// Charts that live on this tab, in page order
    pub fn charts(&self) -> &'static [ChartSlot] {
        match self {
            Tab::Overview => &[
                ChartSlot::PriceDistribution,
                ChartSlot::Correlation,
                ChartSlot::Geographic,
            ],
            Tab::Analysis => &[
                ChartSlot::DistanceScatter,
                ChartSlot::AgeScatter,
                ChartSlot::StoresScatter,
                ChartSlot::LocationAnalysis,
            ],
            Tab::Models => &[ChartSlot::ModelPerformance, ChartSlot::FeatureImportance],
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tab identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tab: {0}")]
pub struct TabError(pub String);

impl FromStr for Tab {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Tab::Overview),
            "analysis" => Ok(Tab::Analysis),
            "models" => Ok(Tab::Models),
            other => Err(TabError(other.to_string())),
        }
    }
}

/// Every chart container on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartSlot {
    PriceDistribution,
    Correlation,
    Geographic,
    DistanceScatter,
    AgeScatter,
    StoresScatter,
    LocationAnalysis,
    ModelPerformance,
    FeatureImportance,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 9] = [
        ChartSlot::PriceDistribution,
        ChartSlot::Correlation,
        ChartSlot::Geographic,
        ChartSlot::DistanceScatter,
        ChartSlot::AgeScatter,
        ChartSlot::StoresScatter,
        ChartSlot::LocationAnalysis,
        ChartSlot::ModelPerformance,
        ChartSlot::FeatureImportance,
    ];

    pub fn container_id(&self) -> &'static str {
        match self {
            ChartSlot::PriceDistribution => "price-distribution-chart",
            ChartSlot::Correlation => "correlation-chart",
            ChartSlot::Geographic => "geographic-chart",
            ChartSlot::DistanceScatter => "distance-scatter-chart",
            ChartSlot::AgeScatter => "age-scatter-chart",
            ChartSlot::StoresScatter => "stores-scatter-chart",
            ChartSlot::LocationAnalysis => "location-analysis-chart",
            ChartSlot::ModelPerformance => "model-performance-chart",
            ChartSlot::FeatureImportance => "feature-importance-chart",
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ChartSlot::PriceDistribution | ChartSlot::Correlation | ChartSlot::Geographic => {
                Tab::Overview
            }
            ChartSlot::DistanceScatter
            | ChartSlot::AgeScatter
            | ChartSlot::StoresScatter
            | ChartSlot::LocationAnalysis => Tab::Analysis,
            ChartSlot::ModelPerformance | ChartSlot::FeatureImportance => Tab::Models,
        }
    }

    /// Backend column name for the scatter slots
    pub fn scatter_feature(&self) -> Option<&'static str> {
        match self {
            ChartSlot::DistanceScatter => Some("distance_to_mrt"),
            ChartSlot::AgeScatter => Some("house_age"),
            ChartSlot::StoresScatter => Some("num_convenience_stores"),
            _ => None,
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

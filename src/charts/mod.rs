//! Charts
//!
//! Builders that turn API payloads into `plotly` plots, and the serialized
//! [`Figure`] a page keeps once a plot is drawn. Nothing here performs I/O.

pub mod builders;

use plotly::Plot;
use serde_json::Value;

/// A drawn plot as `{data, layout, config}` JSON, the shape `Plotly.newPlot`
/// takes
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    json: Value,
}

impl Figure {
    pub fn from_plot(plot: &Plot) -> serde_json::Result<Self> {
        serde_json::from_str(&plot.to_json()).map(|json| Self { json })
    }

    pub fn data(&self) -> &Value {
        &self.json["data"]
    }

    pub fn layout(&self) -> &Value {
        &self.json["layout"]
    }

    pub fn config(&self) -> &Value {
        &self.json["config"]
    }

    /// One trace; `Null` past the end
    pub fn trace(&self, index: usize) -> &Value {
        &self.json["data"][index]
    }

    pub fn trace_count(&self) -> usize {
        self.data().as_array().map_or(0, Vec::len)
    }

    pub fn title(&self) -> Option<&str> {
        title_text(&self.layout()["title"])
    }
}

/// Text of a plotly title, written either as a bare string or `{text}`
pub fn title_text(title: &Value) -> Option<&str> {
    title.as_str().or_else(|| title["text"].as_str())
}

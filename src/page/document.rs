//! In-memory page
//!
//! Records everything the dashboard writes so it can be rendered to HTML
//! afterwards or inspected directly.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use plotly::Plot;

use super::{ChartSlot, Page, Tab};
use crate::charts::Figure;

#[derive(Debug, Default)]
struct DocumentState {
    text: HashMap<String, String>,
    html: HashMap<String, String>,
    charts: BTreeMap<ChartSlot, Figure>,
    plot_counts: HashMap<ChartSlot, usize>,
    active_tab: Tab,
}

/// Page backed by plain maps
#[derive(Debug, Default)]
pub struct Document {
    state: RwLock<DocumentState>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    // A writer that panicked mid-update leaves only whole values behind,
    // so a poisoned lock is still safe to read.
    fn read(&self) -> RwLockReadGuard<'_, DocumentState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, DocumentState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.read().text.get(id).cloned()
    }

    pub fn html(&self, id: &str) -> Option<String> {
        self.read().html.get(id).cloned()
    }

    /// The figure currently drawn in a container
    pub fn figure(&self, slot: ChartSlot) -> Option<Figure> {
        self.read().charts.get(&slot).cloned()
    }

    /// All drawn charts in container order
    pub fn figures(&self) -> Vec<(ChartSlot, Figure)> {
        self.read()
            .charts
            .iter()
            .map(|(slot, fig)| (*slot, fig.clone()))
            .collect()
    }

    /// How many times a container has been drawn into
    pub fn plot_count(&self, slot: ChartSlot) -> usize {
        self.read().plot_counts.get(&slot).copied().unwrap_or(0)
    }

    pub fn total_plots(&self) -> usize {
        self.read().plot_counts.values().sum()
    }

    pub fn active_tab(&self) -> Tab {
        self.read().active_tab
    }
}

impl Page for Document {
    fn set_text(&self, id: &str, text: &str) {
        self.write().text.insert(id.to_string(), text.to_string());
    }

    fn set_html(&self, id: &str, html: String) {
        self.write().html.insert(id.to_string(), html);
    }

    fn plot(&self, slot: ChartSlot, plot: Plot) {
        let figure = match Figure::from_plot(&plot) {
            Ok(figure) => figure,
            Err(e) => {
                tracing::error!(chart = %slot, error = %e, "Failed to serialize plot");
                return;
            }
        };

        let mut state = self.write();
        state.charts.insert(slot, figure);
        *state.plot_counts.entry(slot).or_insert(0) += 1;
    }

    fn activate_tab(&self, tab: Tab) {
        self.write().active_tab = tab;
    }
}

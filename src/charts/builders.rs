//! Chart Builders
//!
//! Pure mappings from API payloads to plots. Each builder takes the payload
//! by reference and never fails; empty payloads yield empty traces.

use plotly::common::{ColorBar, ColorScale, ColorScalePalette, Marker, Mode, Orientation, Title};
use plotly::common::AxisSide;
use plotly::layout::{Axis, Center, Layout, Mapbox, MapboxStyle, Margin};
use plotly::{Bar, Configuration, Plot, Scatter, ScatterMapbox};

use crate::client::{
    CorrelationEntry, DistributionBin, FeatureImportanceEntry, GeoPoint, ModelPerformance,
    ScatterSeries,
};
use crate::format::fixed;

pub const BLUE: &str = "#3B82F6";
pub const GREEN: &str = "#10B981";
pub const RED: &str = "#EF4444";
pub const PURPLE: &str = "#8B5CF6";

pub const PRICE_AXIS_TITLE: &str = "Price (10000 NTD/Ping)";
pub const MODEL_NAMES: [&str; 2] = ["Linear Regression", "Random Forest"];
pub const HOVER_TEMPLATE: &str = "%{text}<extra></extra>";

const MAP_ZOOM: u8 = 12;
const MAP_HEIGHT: usize = 400;

/// Plot with the shared `{responsive: true}` config
fn new_plot(layout: Layout) -> Plot {
    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot.set_configuration(Configuration::new().responsive(true));
    plot
}

fn titled(title: &str) -> Layout {
    Layout::new().title(Title::from(title))
}

fn axis(title: &str) -> Axis {
    Axis::new().title(Title::from(title))
}

fn margin(left: usize) -> Margin {
    Margin::new().top(50).right(50).bottom(50).left(left)
}

fn price_scale(title: &str) -> Marker {
    Marker::new()
        .size(8)
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
        .color_bar(ColorBar::new().title(Title::from(title)))
}

/// Histogram of prices, one bar per bin centred on the bin midpoint
pub fn price_distribution(bins: &[DistributionBin]) -> Plot {
    let trace = Bar::new(
        bins.iter().map(DistributionBin::midpoint).collect(),
        bins.iter().map(|b| b.count).collect(),
    )
    .marker(Marker::new().color(BLUE));

    let mut plot = new_plot(
        titled("Distribution of Housing Prices")
            .x_axis(axis(PRICE_AXIS_TITLE))
            .y_axis(axis("Frequency"))
            .margin(margin(50)),
    );
    plot.add_trace(trace);
    plot
}

/// Horizontal bars, green for non-negative correlation and red otherwise
pub fn correlation(entries: &[CorrelationEntry]) -> Plot {
    let colors: Vec<&'static str> = entries
        .iter()
        .map(|e| if e.correlation >= 0.0 { GREEN } else { RED })
        .collect();

    let trace = Bar::new(
        entries.iter().map(|e| e.correlation).collect(),
        entries.iter().map(|e| e.feature.clone()).collect(),
    )
    .orientation(Orientation::Horizontal)
    .marker(Marker::new().color_array(colors));

    let mut plot = new_plot(
        titled("Feature Correlation with Price")
            .x_axis(axis("Correlation Coefficient").range(vec![-1.0, 1.0]))
            .margin(margin(150)),
    );
    plot.add_trace(trace);
    plot
}

/// Properties on an OpenStreetMap basemap, coloured by price
pub fn geographic_map(points: &[GeoPoint]) -> Plot {
    let hover: Vec<String> = points
        .iter()
        .map(|p| {
            format!(
                "Price: {}<br>Age: {} yrs<br>Distance to MRT: {}m",
                fixed(p.price, 1),
                fixed(p.house_age, 1),
                fixed(p.distance_to_mrt, 0)
            )
        })
        .collect();

    let trace = ScatterMapbox::new(
        points.iter().map(|p| p.latitude).collect(),
        points.iter().map(|p| p.longitude).collect(),
    )
    .mode(Mode::Markers)
    .marker(price_scale(PRICE_AXIS_TITLE).color_array(prices(points)))
    .text_array(hover)
    .hover_template(HOVER_TEMPLATE);

    let mut mapbox = Mapbox::new().style(MapboxStyle::OpenStreetMap).zoom(MAP_ZOOM);
    if let Some(center) = centroid(points) {
        mapbox = mapbox.center(center);
    }

    let mut plot = new_plot(
        Layout::new()
            .mapbox(mapbox)
            .margin(Margin::new().top(0).right(0).bottom(0).left(0))
            .height(MAP_HEIGHT),
    );
    plot.add_trace(trace);
    plot
}

/// Feature against price
pub fn scatter(series: &ScatterSeries) -> Plot {
    let trace = Scatter::new(
        series.data.iter().map(|p| p.x).collect(),
        series.data.iter().map(|p| p.y).collect(),
    )
    .mode(Mode::Markers)
    .marker(Marker::new().color(BLUE).size(6));

    let mut plot = new_plot(
        titled(&format!("{} vs Price", series.feature))
            .x_axis(axis(&series.feature))
            .y_axis(axis(PRICE_AXIS_TITLE))
            .margin(margin(50)),
    );
    plot.add_trace(trace);
    plot
}

/// Longitude/latitude plane coloured by price
pub fn location_analysis(points: &[GeoPoint]) -> Plot {
    let trace = Scatter::new(
        points.iter().map(|p| p.longitude).collect(),
        points.iter().map(|p| p.latitude).collect(),
    )
    .mode(Mode::Markers)
    .marker(price_scale("Price").color_array(prices(points)));

    let mut plot = new_plot(
        titled("Price by Geographic Location")
            .x_axis(axis("Longitude"))
            .y_axis(axis("Latitude"))
            .margin(margin(50)),
    );
    plot.add_trace(trace);
    plot
}

/// R² on the left axis and MSE on an overlaid right axis
pub fn model_performance(perf: &ModelPerformance) -> Plot {
    let models = || MODEL_NAMES.to_vec();

    let r2 = Bar::new(
        models(),
        vec![perf.linear_regression.r2, perf.random_forest.r2],
    )
    .name("R² Score")
    .marker(Marker::new().color(GREEN));

    let mse = Bar::new(
        models(),
        vec![perf.linear_regression.mse, perf.random_forest.mse],
    )
    .name("MSE")
    .y_axis("y2")
    .marker(Marker::new().color(RED));

    let mut plot = new_plot(
        titled("Model Performance Comparison")
            .y_axis(axis("R² Score").side(AxisSide::Left))
            .y_axis2(
                axis("Mean Squared Error")
                    .side(AxisSide::Right)
                    .overlaying("y"),
            )
            .margin(margin(50)),
    );
    plot.add_trace(r2);
    plot.add_trace(mse);
    plot
}

/// Horizontal bars in the order the backend sent them
pub fn feature_importance(entries: &[FeatureImportanceEntry]) -> Plot {
    let trace = Bar::new(
        entries.iter().map(|e| e.importance).collect(),
        entries.iter().map(|e| e.feature.clone()).collect(),
    )
    .orientation(Orientation::Horizontal)
    .marker(Marker::new().color(PURPLE));

    let mut plot = new_plot(
        titled("Feature Importance (Random Forest)")
            .x_axis(axis("Importance (%)"))
            .margin(margin(150)),
    );
    plot.add_trace(trace);
    plot
}

fn prices(points: &[GeoPoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}

/// Mean position, or `None` for an empty set so Plotly picks its own centre
fn centroid(points: &[GeoPoint]) -> Option<Center> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    Some(Center::new(
        points.iter().map(|p| p.latitude).sum::<f64>() / n,
        points.iter().map(|p| p.longitude).sum::<f64>() / n,
    ))
}

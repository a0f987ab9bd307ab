//! Text and HTML fragments the dashboard writes into the page

use crate::client::{PredictionInput, PredictionResult, SummaryStats};
use crate::format::{fixed, number};

pub const PREDICTION_ERROR_MESSAGE: &str =
    "Error making prediction. Please check your inputs and try again.";

/// Summary counter values in page order: records, price, age, distance
pub fn summary_counters(summary: &SummaryStats) -> [String; 4] {
    [
        summary.total_records.to_string(),
        format_price(summary.price_stats.mean),
        format!("{} yrs", fixed(summary.feature_stats.avg_house_age, 1)),
        format!("{}m", fixed(summary.feature_stats.avg_distance_to_mrt, 0)),
    ]
}

/// `$35.2K`
pub fn format_price(value: f64) -> String {
    format!("${}K", fixed(value, 1))
}

pub fn prediction_results_html(input: &PredictionInput, result: &PredictionResult) -> String {
    let stores = input
        .num_convenience_stores
        .map(|n| n.to_string())
        .unwrap_or_else(|| "NaN".to_string());

    format!(
        r#"
<div class="grid grid-cols-1 md:grid-cols-2 gap-4">
    <div class="bg-blue-100 p-4 rounded-lg">
        <h4 class="font-semibold text-blue-800">Linear Regression</h4>
        <p class="text-2xl font-bold text-blue-600">{linear}</p>
        <p class="text-sm text-blue-600">per unit area</p>
    </div>
    <div class="bg-green-100 p-4 rounded-lg">
        <h4 class="font-semibold text-green-800">Random Forest</h4>
        <p class="text-2xl font-bold text-green-600">{forest}</p>
        <p class="text-sm text-green-600">per unit area</p>
    </div>
</div>
<div class="mt-4 p-4 bg-gray-100 rounded-lg">
    <h4 class="font-semibold text-gray-800 mb-2">Input Summary</h4>
    <div class="grid grid-cols-2 gap-2 text-sm">
        <div>House Age: {age} years</div>
        <div>Distance to MRT: {distance}m</div>
        <div>Convenience Stores: {stores}</div>
        <div>Location: {lat}, {lon}</div>
    </div>
</div>
"#,
        linear = format_price(result.linear_regression_prediction),
        forest = format_price(result.random_forest_prediction),
        age = number(input.house_age),
        distance = number(input.distance_to_mrt),
        lat = fixed(input.latitude, 3),
        lon = fixed(input.longitude, 3),
    )
}

pub fn prediction_error_html() -> String {
    format!(
        r#"
<div class="text-red-600">
    <i class="fas fa-exclamation-triangle mr-2"></i>
    {PREDICTION_ERROR_MESSAGE}
</div>
"#
    )
}

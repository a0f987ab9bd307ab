//! Controller behavior against an in-process backend

mod common;

use common::MockApi;
use housing_dashboard::dashboard::{Dashboard, PredictionForm, PREDICTION_ERROR_MESSAGE};
use housing_dashboard::page::{
    ChartSlot, Document, Tab, AVG_AGE_ID, AVG_DISTANCE_ID, AVG_PRICE_ID, PREDICTION_RESULTS_ID,
    TOTAL_RECORDS_ID,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const BATCH_DEADLINE: Duration = Duration::from_secs(5);

fn setup() -> (Arc<MockApi>, Arc<Document>, Dashboard<MockApi, Document>) {
    let api = Arc::new(MockApi::new());
    let doc = Arc::new(Document::new());
    let dashboard = Dashboard::new(Arc::clone(&api), Arc::clone(&doc));
    (api, doc, dashboard)
}

fn form() -> PredictionForm {
    PredictionForm {
        transaction_date: "2013.5".into(),
        house_age: "10".into(),
        distance_to_mrt: "500".into(),
        num_convenience_stores: "5".into(),
        latitude: "24.97".into(),
        longitude: "121.54".into(),
    }
}

#[tokio::test]
async fn test_init_loads_summary_and_overview() {
    let (api, doc, dashboard) = setup();
    dashboard.init().await;

    assert_eq!(api.calls()[0], "summary");
    assert_eq!(api.count("distribution"), 1);
    assert_eq!(api.count("correlation"), 1);
    assert_eq!(api.count("geographic"), 1);
    assert_eq!(api.calls().len(), 4);

    assert_eq!(doc.text(TOTAL_RECORDS_ID).as_deref(), Some("414"));
    assert_eq!(doc.text(AVG_PRICE_ID).as_deref(), Some("$38.0K"));
    assert_eq!(doc.text(AVG_AGE_ID).as_deref(), Some("17.7 yrs"));
    assert_eq!(doc.text(AVG_DISTANCE_ID).as_deref(), Some("1084m"));

    for slot in Tab::Overview.charts() {
        assert_eq!(doc.plot_count(*slot), 1, "{} not drawn", slot);
    }
    assert_eq!(doc.total_plots(), 3);
}

#[tokio::test]
async fn test_summary_failure_keeps_placeholders() {
    let (api, doc, dashboard) = setup();
    api.fail("summary");
    dashboard.init().await;

    assert!(doc.text(TOTAL_RECORDS_ID).is_none());
    // Overview charts still load
    assert_eq!(doc.total_plots(), 3);
}

#[tokio::test]
async fn test_analysis_tab_loads_only_analysis_charts() {
    let (api, doc, dashboard) = setup();
    dashboard.switch_tab(Tab::Analysis).await;

    assert_eq!(doc.active_tab(), Tab::Analysis);
    assert_eq!(api.count("scatter:distance_to_mrt"), 1);
    assert_eq!(api.count("scatter:house_age"), 1);
    assert_eq!(api.count("scatter:num_convenience_stores"), 1);
    assert_eq!(api.count("geographic"), 1);
    assert_eq!(api.count("model_performance"), 0);
    assert_eq!(api.count("feature_importance"), 0);

    for slot in Tab::Analysis.charts() {
        assert_eq!(doc.plot_count(*slot), 1);
    }
    assert_eq!(doc.plot_count(ChartSlot::Geographic), 0);
}

#[tokio::test]
async fn test_models_tab_loads_only_model_charts() {
    let (api, doc, dashboard) = setup();
    dashboard.switch_tab(Tab::Models).await;

    assert_eq!(api.calls().len(), 2);
    assert_eq!(api.count("model_performance"), 1);
    assert_eq!(api.count("feature_importance"), 1);
    assert_eq!(doc.plot_count(ChartSlot::ModelPerformance), 1);
    assert_eq!(doc.plot_count(ChartSlot::FeatureImportance), 1);
}

#[tokio::test]
async fn test_overview_switch_triggers_no_loads() {
    let (api, doc, dashboard) = setup();
    dashboard.switch_tab(Tab::Models).await;
    api.reset();

    dashboard.switch_tab(Tab::Overview).await;

    assert!(api.calls().is_empty());
    assert_eq!(doc.active_tab(), Tab::Overview);
}

#[tokio::test]
async fn test_revisiting_tab_refetches() {
    let (api, doc, dashboard) = setup();
    dashboard.switch_tab(Tab::Models).await;
    dashboard.switch_tab(Tab::Overview).await;
    dashboard.switch_tab(Tab::Models).await;

    assert_eq!(api.count("model_performance"), 2);
    assert_eq!(doc.plot_count(ChartSlot::ModelPerformance), 2);
}

#[tokio::test]
async fn test_failed_chart_leaves_container_untouched() {
    let (api, doc, dashboard) = setup();
    api.fail("scatter:house_age");

    dashboard.switch_tab(Tab::Analysis).await;

    assert_eq!(doc.plot_count(ChartSlot::AgeScatter), 0);
    assert!(doc.figure(ChartSlot::AgeScatter).is_none());
    // Siblings in the same batch are unaffected
    assert_eq!(doc.plot_count(ChartSlot::DistanceScatter), 1);
    assert_eq!(doc.plot_count(ChartSlot::StoresScatter), 1);
    assert_eq!(doc.plot_count(ChartSlot::LocationAnalysis), 1);

    api.recover("scatter:house_age");
    dashboard.switch_tab(Tab::Analysis).await;

    assert_eq!(doc.plot_count(ChartSlot::AgeScatter), 1);
    let fig = doc.figure(ChartSlot::AgeScatter).unwrap();
    assert_eq!(fig.title(), Some("house age vs Price"));
}

#[tokio::test]
async fn test_failed_chart_keeps_previous_figure() {
    let (api, doc, dashboard) = setup();
    dashboard.switch_tab(Tab::Models).await;

    api.fail("feature_importance");
    dashboard.switch_tab(Tab::Models).await;

    assert_eq!(doc.plot_count(ChartSlot::FeatureImportance), 1);
    assert!(doc.figure(ChartSlot::FeatureImportance).is_some());
    assert_eq!(doc.plot_count(ChartSlot::ModelPerformance), 2);
}

#[tokio::test]
async fn test_prediction_renders_both_models() {
    let (api, doc, dashboard) = setup();
    let result = dashboard.make_prediction(&form()).await.unwrap();

    assert_eq!(result.linear_regression_prediction, 35.2);

    let input = api.last_input().unwrap();
    assert_eq!(input.transaction_date, 2013.5);
    assert_eq!(input.num_convenience_stores, Some(5));

    let html = doc.html(PREDICTION_RESULTS_ID).unwrap();
    assert!(html.contains("$35.2K"));
    assert!(html.contains("$38.7K"));
    assert!(html.contains("Location: 24.970, 121.540"));
}

#[tokio::test]
async fn test_prediction_sends_unparsed_fields_as_not_a_number() {
    let (api, _doc, dashboard) = setup();
    let mut form = form();
    form.house_age = "old".into();
    form.num_convenience_stores = "".into();

    dashboard.make_prediction(&form).await.unwrap();

    let input = api.last_input().unwrap();
    assert!(input.house_age.is_nan());
    assert_eq!(input.num_convenience_stores, None);

    let body = serde_json::to_value(input).unwrap();
    assert!(body["house_age"].is_null());
    assert!(body["num_convenience_stores"].is_null());
}

#[tokio::test]
async fn test_prediction_failure_renders_error() {
    let (api, doc, dashboard) = setup();
    api.fail("predict");

    assert!(dashboard.make_prediction(&form()).await.is_err());

    let html = doc.html(PREDICTION_RESULTS_ID).unwrap();
    assert!(html.contains(PREDICTION_ERROR_MESSAGE));
    assert!(!html.contains("$35.2K"));
}

#[tokio::test]
async fn test_error_replaces_previous_results() {
    let (api, doc, dashboard) = setup();
    dashboard.make_prediction(&form()).await.unwrap();

    api.fail("predict");
    let _ = dashboard.make_prediction(&form()).await;

    let html = doc.html(PREDICTION_RESULTS_ID).unwrap();
    assert!(html.contains(PREDICTION_ERROR_MESSAGE));
    assert!(!html.contains("Random Forest"));
}

#[tokio::test]
async fn test_overview_batch_runs_concurrently() {
    let (api, doc, dashboard) = setup();
    api.hold_charts(3);

    timeout(BATCH_DEADLINE, dashboard.load_overview_charts())
        .await
        .expect("overview charts did not overlap");

    assert_eq!(doc.total_plots(), 3);
}

#[tokio::test]
async fn test_analysis_batch_runs_concurrently() {
    let (api, doc, dashboard) = setup();
    api.hold_charts(4);

    timeout(BATCH_DEADLINE, dashboard.switch_tab(Tab::Analysis))
        .await
        .expect("analysis charts did not overlap");

    assert_eq!(doc.total_plots(), 4);
}

#[tokio::test]
async fn test_models_batch_runs_concurrently() {
    let (api, doc, dashboard) = setup();
    api.hold_charts(2);

    timeout(BATCH_DEADLINE, dashboard.switch_tab(Tab::Models))
        .await
        .expect("model charts did not overlap");

    assert_eq!(doc.total_plots(), 2);
}

#[tokio::test]
async fn test_init_awaits_summary_before_charts() {
    let (api, doc, dashboard) = setup();
    // The summary is not held, so only the three overview charts meet
    api.hold_charts(3);

    timeout(BATCH_DEADLINE, dashboard.init())
        .await
        .expect("init did not complete");

    assert_eq!(api.calls()[0], "summary");
    assert_eq!(doc.text(TOTAL_RECORDS_ID).as_deref(), Some("414"));
}

#[tokio::test]
async fn test_reference_prediction_scenario() {
    let (api, doc, dashboard) = setup();
    let form = PredictionForm {
        transaction_date: "2013.5".into(),
        house_age: "10".into(),
        distance_to_mrt: "500".into(),
        num_convenience_stores: "3".into(),
        latitude: "24.9".into(),
        longitude: "121.5".into(),
    };

    let result = dashboard.make_prediction(&form).await.unwrap();
    assert_eq!(result.random_forest_prediction, 38.7);

    let input = api.last_input().unwrap();
    assert_eq!(input.num_convenience_stores, Some(3));
    assert_eq!(input.latitude, 24.9);
    assert_eq!(input.longitude, 121.5);

    let html = doc.html(PREDICTION_RESULTS_ID).unwrap();
    assert!(html.contains("$35.2K"));
    assert!(html.contains("$38.7K"));
    assert!(html.contains("House Age: 10 years"));
    assert!(html.contains("Distance to MRT: 500m"));
    assert!(html.contains("Convenience Stores: 3"));
    assert!(html.contains("Location: 24.900, 121.500"));
}

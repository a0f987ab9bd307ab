//! HTML rendering of a [`Document`]

use chrono::{DateTime, Utc};
use std::fmt::Write;

use super::*;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const ACTIVE_TAB_CLASSES: &str = "active border-blue-500 text-blue-600";
const INACTIVE_TAB_CLASSES: &str = "border-transparent text-gray-500";

/// Form inputs in page order: (name, label, step)
const FORM_FIELDS: [(&str, &str, &str); 6] = [
    ("transaction_date", "Transaction Date", "0.001"),
    ("house_age", "House Age (years)", "0.1"),
    ("distance_to_mrt", "Distance to MRT (m)", "0.1"),
    ("num_convenience_stores", "Convenience Stores", "1"),
    ("latitude", "Latitude", "0.00001"),
    ("longitude", "Longitude", "0.00001"),
];

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON that is safe to embed inside a `<script>` element
fn script_json(json: String) -> String {
    json.replace("</", "<\\/")
}

/// Render the full dashboard page, including one `Plotly.newPlot` call per
/// drawn chart
pub fn render_html(doc: &Document, rendered_at: DateTime<Utc>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let active = doc.active_tab();

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Housing Price Prediction Dashboard</title>
    <script src="{TAILWIND_CDN}"></script>
    <script src="{PLOTLY_CDN}"></script>
</head>
<body class="bg-gray-50">
<div class="max-w-7xl mx-auto px-4 py-8">
    <h1 class="text-3xl font-bold text-gray-900 mb-6">Housing Price Prediction Dashboard</h1>
"#
    );

    render_counters(&mut out, doc);
    render_tab_buttons(&mut out, active);

    for tab in Tab::ALL {
        let hidden = if tab == active { "" } else { " hidden" };
        let _ = writeln!(
            out,
            r#"    <div id="{}" class="tab-content{hidden}">"#,
            tab.panel_id()
        );
        out.push_str(r#"        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">"#);
        out.push('\n');
        for slot in tab.charts() {
            let _ = writeln!(
                out,
                r#"            <div class="bg-white rounded-lg shadow p-4"><div id="{}"></div></div>"#,
                slot.container_id()
            );
        }
        out.push_str("        </div>\n");
        if tab == Tab::Models {
            render_prediction_form(&mut out, doc);
        }
        out.push_str("    </div>\n");
    }

    let _ = writeln!(
        out,
        r#"    <p class="mt-8 text-xs text-gray-400">Rendered {}</p>"#,
        rendered_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out.push_str("</div>\n");

    render_plot_script(&mut out, doc);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_counters(out: &mut String, doc: &Document) {
    let counters = [
        (TOTAL_RECORDS_ID, "Total Records"),
        (AVG_PRICE_ID, "Average Price"),
        (AVG_AGE_ID, "Average House Age"),
        (AVG_DISTANCE_ID, "Average Distance to MRT"),
    ];

    out.push_str(r#"    <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">"#);
    out.push('\n');
    for (id, label) in counters {
        let value = doc.text(id).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            r#"        <div class="bg-white rounded-lg shadow p-4"><p class="text-sm text-gray-500">{label}</p><p id="{id}" class="text-2xl font-bold">{}</p></div>"#,
            escape_html(&value)
        );
    }
    out.push_str("    </div>\n");
}

fn render_tab_buttons(out: &mut String, active: Tab) {
    out.push_str(r#"    <nav class="flex space-x-4 border-b mb-6">"#);
    out.push('\n');
    for tab in Tab::ALL {
        let classes = if tab == active {
            ACTIVE_TAB_CLASSES
        } else {
            INACTIVE_TAB_CLASSES
        };
        let _ = writeln!(
            out,
            r#"        <a href="/?tab={tab}" data-tab="{tab}" class="tab-button py-2 px-4 border-b-2 font-medium {classes}">{}</a>"#,
            tab.label()
        );
    }
    out.push_str("    </nav>\n");
}

fn render_prediction_form(out: &mut String, doc: &Document) {
    let _ = writeln!(
        out,
        r#"        <div class="bg-white rounded-lg shadow p-6 mt-6">
            <h3 class="text-lg font-semibold mb-4">Predict Price</h3>
            <form id="{PREDICTION_FORM_ID}" method="post" action="/predict" class="grid grid-cols-2 md:grid-cols-3 gap-4">"#
    );
    for (name, label, step) in FORM_FIELDS {
        let _ = writeln!(
            out,
            r#"                <label class="text-sm text-gray-700">{label}<input type="number" step="{step}" id="{name}" name="{name}" class="mt-1 block w-full border rounded p-2"></label>"#
        );
    }
    out.push_str(
        r#"                <button type="submit" class="bg-blue-600 text-white rounded p-2">Predict</button>
            </form>
"#,
    );
    let results = doc.html(PREDICTION_RESULTS_ID).unwrap_or_default();
    let _ = writeln!(
        out,
        r#"            <div id="{PREDICTION_RESULTS_ID}" class="mt-6">{results}</div>
        </div>"#
    );
}

fn render_plot_script(out: &mut String, doc: &Document) {
    let figures = doc.figures();
    if figures.is_empty() {
        return;
    }

    out.push_str("<script>\n");
    for (slot, figure) in figures {
        let parts = serde_json::to_string(figure.data()).and_then(|data| {
            Ok((
                data,
                serde_json::to_string(figure.layout())?,
                serde_json::to_string(figure.config())?,
            ))
        });
        match parts {
            Ok((data, layout, config)) => {
                let _ = writeln!(
                    out,
                    "Plotly.newPlot('{}', {}, {}, {});",
                    slot.container_id(),
                    script_json(data),
                    script_json(layout),
                    script_json(config)
                );
            }
            Err(e) => {
                tracing::error!(chart = %slot, error = %e, "Failed to serialize figure");
            }
        }
    }
    out.push_str("</script>\n");
}

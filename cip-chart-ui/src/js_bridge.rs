//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals once D3 has loaded. This module serializes
//! chart data to JSON and calls those globals.

use cip_core::cluster::{ClusterPoint, Partition};
use cip_core::weather::ChartPoint;
use serde::Serialize;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// D3 is pulled from a CDN if the host page did not include it.
const D3_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CIP JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at app startup.
///
/// The chart scripts are evaluated at global scope (indirect eval) once D3
/// is available, then each function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, SCATTER_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!("window.__cipChartScripts = {};", js_literal(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (typeof d3 === 'undefined' && !document.getElementById('cip-d3')) {{
                var s = document.createElement('script');
                s.id = 'cip-d3';
                s.src = {d3_url};
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__cipChartScripts);
                    delete window.__cipChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cipChartsReady = true;
                    console.log('CIP charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        d3_url = js_literal(D3_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Call `window.{function}(containerId, dataJson, configJson)` once charts
/// are initialized and the container exists.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let id = js_literal(container_id);
    let data = js_literal(data_json);
    let config = js_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cipChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[CIP] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

#[derive(Serialize)]
struct LineChartConfig<'a> {
    color: &'a str,
    #[serde(rename = "yUnit")]
    y_unit: &'a str,
    label: &'a str,
}

/// Render the forecast temperature line.
pub fn render_forecast_chart(container_id: &str, series: &[ChartPoint]) {
    let data_json = serde_json::to_string(series).unwrap_or_else(|_| "[]".to_string());
    let config_json = serde_json::to_string(&LineChartConfig {
        color: "#8b5cf6",
        y_unit: "°C",
        label: "Avg Temp",
    })
    .unwrap_or_default();
    render_when_ready("renderLineChart", container_id, &data_json, &config_json);
}

#[derive(Serialize)]
struct ScatterSeries<'a> {
    name: &'a str,
    color: &'a str,
    points: &'a [ClusterPoint],
}

/// Render the three cluster buckets as colored series on one scatter plot.
pub fn render_cluster_chart(container_id: &str, partition: &Partition) {
    let series: Vec<ScatterSeries> = partition
        .iter()
        .map(|(label, points)| ScatterSeries {
            name: label.name(),
            color: label.color(),
            points,
        })
        .collect();
    let data_json = serde_json::to_string(&series).unwrap_or_else(|_| "[]".to_string());
    let config_json = serde_json::json!({
        "xLabel": "Temperature",
        "xUnit": "°C",
        "yLabel": "PM 2.5",
        "yUnit": "µg",
    })
    .to_string();
    render_when_ready("renderScatterChart", container_id, &data_json, &config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_literal(container_id)
    ));
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert failed: {}", message);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::{js_literal, LINE_CHART_JS, SCATTER_CHART_JS, TOOLTIP_JS};

    #[test]
    fn test_tooltips_never_parse_backend_strings_as_html() {
        assert!(!TOOLTIP_JS.contains("innerHTML"));
        assert!(TOOLTIP_JS.contains("textContent"));
        for script in [LINE_CHART_JS, SCATTER_CHART_JS] {
            assert!(!script.contains("<strong>"));
            assert!(!script.contains("<br"));
        }
    }

    #[test]
    fn test_js_literal_escapes_quotes_and_newlines() {
        assert_eq!(js_literal("chart"), "\"chart\"");
        assert_eq!(
            js_literal("[{\"date\":\"Mon\"}]\n'x'"),
            "\"[{\\\"date\\\":\\\"Mon\\\"}]\\n'x'\""
        );
    }
}

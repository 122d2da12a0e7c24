//! City cluster scatter plot.

use cip_chart_ui::components::{ChartContainer, ChartHeader};
use cip_chart_ui::js_bridge;
use cip_chart_ui::state::AppState;
use cip_core::cluster::ClusterLabel;
use cip_core::controller::ClusterAnalysis;
use dioxus::prelude::*;

const CHART_ID: &str = "cluster-chart";

#[component]
pub fn AnalysisView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_signal(ClusterAnalysis::new);

    // Load once on mount
    use_effect(move || {
        let Some(client) = state.client.peek().clone() else {
            log::warn!("No API client; cluster analysis not loaded");
            return;
        };
        let request = view.write().begin_load();
        spawn(async move {
            let result = client.analysis().await;
            view.write().complete_load(request, result);
        });
    });

    use_effect(move || {
        let analysis = view.read();
        if !analysis.loading() {
            js_bridge::render_cluster_chart(CHART_ID, analysis.partition());
        }
    });

    let (loading, counts) = {
        let analysis = view.read();
        let counts: Vec<(ClusterLabel, usize)> = analysis
            .partition()
            .iter()
            .map(|(label, points)| (label, points.len()))
            .collect();
        (analysis.loading(), counts)
    };

    rsx! {
        div {
            style: "padding: 2rem; background: rgba(255,255,255,0.03); border-radius: 16px;",
            ChartHeader {
                title: "City Clusters".to_string(),
                subtitle: "Temperature (°C) vs PM 2.5 (µg)".to_string(),
            }
            ChartContainer {
                id: CHART_ID.to_string(),
                loading,
                min_height: 400,
            }
            if !loading {
                div {
                    style: "display: flex; gap: 1.5rem; justify-content: center; margin-top: 1rem; font-size: 0.9rem;",
                    for (label, count) in counts {
                        span {
                            key: "{label.name()}",
                            style: "color: {label.color()};",
                            "{label.name()}: {count}"
                        }
                    }
                }
            }
        }
    }
}

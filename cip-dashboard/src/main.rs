//! Climate Intelligence Platform dashboard
//!
//! A single page with four tabs, each backed by its own controller from
//! `cip_core::controller`:
//! - Dashboard: current conditions for the city picked in the sidebar
//! - Analytics: multi-day forecast chart, day cards and a city insight
//! - AI Predictions: feature form submitted to one of two inference endpoints
//! - Cluster Analysis: scatter plot of the city clusters, loaded on mount
//!
//! Every view follows the same flow: `begin_*` on the controller signal,
//! `spawn` the request on the shared `ApiClient`, then `complete_*` with the
//! result. Superseded responses are dropped by the controller.

mod views;

use cip_chart_ui::components::{ErrorDisplay, PageHeader, TabNav};
use cip_chart_ui::js_bridge;
use cip_chart_ui::state::{AppState, Tab};
use dioxus::prelude::*;
use views::{AnalysisView, AnalyticsView, DashboardView, PredictView};

fn main() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        eprintln!("failed to init logger: {}", e);
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("cip-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Chart scripts load once; views poll until they are ready.
    use_hook(js_bridge::init_charts);

    let active = (state.active_tab)();

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 2rem; font-family: system-ui, -apple-system, sans-serif; color: white;",

            PageHeader {}

            TabNav {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            match active {
                Tab::Dashboard => rsx! { DashboardView {} },
                Tab::Analytics => rsx! { AnalyticsView {} },
                Tab::Predict => rsx! { PredictView {} },
                Tab::Analysis => rsx! { AnalysisView {} },
            }
        }
    }
}

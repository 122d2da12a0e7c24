//! Forecast chart, day cards and city insight.

use cip_chart_ui::components::{ChartContainer, ChartHeader, CitySelector, ForecastOutlook};
use cip_chart_ui::js_bridge;
use cip_chart_ui::state::AppState;
use cip_core::controller::Forecast;
use cip_core::City;
use dioxus::prelude::*;

/// DOM id for the D3 forecast chart.
const CHART_ID: &str = "forecast-chart";

fn select_city(state: AppState, mut view: Signal<Forecast>, city: City) {
    let Some(client) = state.client.peek().clone() else {
        log::warn!("No API client; not fetching forecast for {}", city);
        return;
    };
    let request = view.write().begin_select(city);
    spawn(async move {
        let result = client.forecast(request.city).await;
        view.write().complete_select(request, result);
    });
}

#[component]
pub fn AnalyticsView() -> Element {
    let state = use_context::<AppState>();
    let view = use_signal(Forecast::new);

    use_effect(move || {
        let city = view.peek().selected();
        select_city(state, view, city);
    });

    // Redraw whenever the series changes
    use_effect(move || {
        let series = view.read().chart_series();
        if series.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
        } else {
            js_bridge::render_forecast_chart(CHART_ID, &series);
        }
    });

    let (selected, loading, cards, insight) = {
        let forecast = view.read();
        (
            forecast.selected(),
            forecast.loading(),
            forecast.cards(),
            forecast.insight(),
        )
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2rem;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0;", "Forecast Analytics" }
                CitySelector {
                    selected,
                    on_select: move |city| select_city(state, view, city),
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 2rem;",
                div {
                    style: "padding: 2rem; background: rgba(255,255,255,0.03); border-radius: 16px;",
                    ChartHeader {
                        title: "Temperature Trend".to_string(),
                        subtitle: "Average daily temperature (°C)".to_string(),
                    }
                    ChartContainer {
                        id: CHART_ID.to_string(),
                        loading,
                    }
                }
                div {
                    style: "padding: 2rem; background: rgba(255,255,255,0.03); border-radius: 16px;",
                    ChartHeader {
                        title: "Environmental Insight".to_string(),
                        color: "#60a5fa".to_string(),
                    }
                    p { style: "line-height: 1.6; color: #cbd5e1;", "{insight}" }
                }
            }

            ForecastOutlook { cards }
        }
    }
}

//! Current conditions for the selected city.

use cip_chart_ui::components::{CityList, LoadingSpinner, StatCard};
use cip_chart_ui::state::AppState;
use cip_core::controller::{CurrentConditions, CurrentDisplay};
use cip_core::City;
use dioxus::prelude::*;

/// Issue the snapshot request for `city` and apply the response when it lands.
fn select_city(state: AppState, mut view: Signal<CurrentConditions>, city: City) {
    let Some(client) = state.client.peek().clone() else {
        log::warn!("No API client; not fetching current weather for {}", city);
        return;
    };
    let request = view.write().begin_select(city);
    spawn(async move {
        let result = client.current_weather(request.city).await;
        view.write().complete_select(request, result);
    });
}

#[component]
pub fn DashboardView() -> Element {
    let state = use_context::<AppState>();
    let view = use_signal(CurrentConditions::new);

    // Fetch the default city on mount
    use_effect(move || {
        let city = view.peek().selected();
        select_city(state, view, city);
    });

    let selected = view.read().selected();
    let display = view.read().display();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 250px 1fr; gap: 2rem;",

            CityList {
                selected,
                on_select: move |city| select_city(state, view, city),
            }

            div {
                style: "padding: 2rem; background: rgba(255,255,255,0.03); border-radius: 16px;",
                h2 {
                    style: "margin-top: 0; font-size: 2rem;",
                    "{selected} Overview"
                }
                match display {
                    CurrentDisplay::Loading => rsx! {
                        LoadingSpinner { message: "Loading live data...".to_string() }
                    },
                    CurrentDisplay::NoData => rsx! {
                        p { style: "color: #94a3b8;", "No data available." }
                    },
                    CurrentDisplay::Ready(display) => rsx! {
                        div {
                            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1.5rem;",
                            StatCard { label: "Temp".to_string(), value: display.temperature, color: "#60a5fa".to_string() }
                            StatCard { label: "Humidity".to_string(), value: display.humidity, color: "#34d399".to_string() }
                            StatCard { label: "Wind".to_string(), value: display.wind, color: "#f472b6".to_string() }
                            StatCard { label: "Status".to_string(), value: display.status, color: "#fbbf24".to_string() }
                        }
                    },
                }
            }
        }
    }
}

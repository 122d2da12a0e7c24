//! Prediction form and result panel.

use cip_chart_ui::components::{ModeToggle, NumberField};
use cip_chart_ui::js_bridge;
use cip_chart_ui::state::AppState;
use cip_core::controller::{Outcome, Prediction, PREDICTION_ALERT};
use cip_core::prediction::{PredictionField, PredictionMode, ResultDisplay};
use dioxus::prelude::*;

fn submit(state: AppState, mut view: Signal<Prediction>) {
    let Some(client) = state.client.peek().clone() else {
        js_bridge::alert(PREDICTION_ALERT);
        return;
    };
    let request = view.write().begin_submit();
    spawn(async move {
        let outcome = match request.mode {
            PredictionMode::Risk => {
                let result = client.predict_air_quality(&request.features).await;
                view.write().complete_risk(request, result)
            }
            PredictionMode::Pollution => {
                let result = client.predict_pollution(&request.features).await;
                view.write().complete_pollution(request, result)
            }
        };
        if let Outcome::Failed(message) = outcome {
            js_bridge::alert(&message);
        }
    });
}

#[component]
pub fn PredictView() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_signal(Prediction::new);

    let (mode, form, errors, loading, result) = {
        let prediction = view.read();
        let errors = PredictionField::ALL
            .map(|field| prediction.field_error(field).map(|e| e.to_string()));
        (
            prediction.mode(),
            *prediction.form(),
            errors,
            prediction.loading(),
            prediction.result().map(|r| r.display()),
        )
    };

    rsx! {
        div {
            style: "max-width: 800px; margin: 0 auto;",

            ModeToggle {
                mode,
                on_change: move |mode| view.write().set_mode(mode),
            }

            div {
                style: "padding: 2rem; background: rgba(255,255,255,0.03); border-radius: 16px;",
                h2 {
                    style: "margin-top: 0; text-align: center;",
                    "{mode.label()}"
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem;",
                    for (field, error) in PredictionField::ALL.into_iter().zip(errors) {
                        NumberField {
                            key: "{field.key()}",
                            name: field.key().to_string(),
                            label: field.label(),
                            value: form.get(field),
                            error,
                            on_input: move |input: String| view.write().set_field(field, &input).is_ok(),
                        }
                    }
                }

                button {
                    style: "width: 100%; margin-top: 2rem; padding: 1rem; font-size: 1.1rem;",
                    disabled: loading,
                    onclick: move |_| submit(state, view),
                    if loading { "Analyzing..." } else { "Run Prediction" }
                }

                match result {
                    Some(display) => rsx! { ResultPanel { display } },
                    None => rsx! {},
                }
            }
        }
    }
}

#[component]
fn ResultPanel(display: ResultDisplay) -> Element {
    rsx! {
        div {
            style: "margin-top: 2rem; padding: 1.5rem; border-radius: 12px; background: rgba(255,255,255,0.05); text-align: center;",
            h3 { style: "margin-top: 0;", "Prediction Result" }
            match display {
                ResultDisplay::Risk { category, good, confidence } => rsx! {
                    div {
                        style: if good { "font-size: 2rem; font-weight: bold; color: #34d399;" } else { "font-size: 2rem; font-weight: bold; color: #fca5a5;" },
                        "{category}"
                    }
                    if let Some(confidence) = confidence {
                        p { style: "color: #94a3b8;", "{confidence}" }
                    }
                },
                ResultDisplay::Pollution { concentration } => rsx! {
                    div {
                        style: "font-size: 2.5rem; font-weight: bold; color: #60a5fa;",
                        "{concentration}"
                    }
                    p { style: "color: #94a3b8;", "Estimated PM2.5 Concentration" }
                },
            }
        }
    }
}

//! Labeled numeric input for the prediction form.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NumberFieldProps {
    pub name: String,
    pub label: String,
    /// Last accepted value
    pub value: f64,
    /// Why the last edit of this field was rejected, if it was
    #[props(default)]
    pub error: Option<String>,
    /// Called with the raw input text on commit; returns whether it was accepted.
    pub on_input: Callback<String, bool>,
}

/// Numeric input that snaps back to the accepted value when an edit is
/// rejected, so the box never shows a value the form does not hold.
#[component]
pub fn NumberField(props: NumberFieldProps) -> Element {
    let mut text = use_signal(|| props.value.to_string());
    let accepted = props.value;
    let on_input = props.on_input;

    rsx! {
        div {
            label {
                r#for: "field-{props.name}",
                style: "display: block; margin-bottom: 0.5rem; text-transform: capitalize; color: #94a3b8;",
                "{props.label}"
            }
            input {
                id: "field-{props.name}",
                r#type: "number",
                name: "{props.name}",
                step: "any",
                value: "{text}",
                // Track keystrokes so a later reset is a real change to patch.
                oninput: move |evt: Event<FormData>| text.set(evt.value()),
                onchange: move |evt: Event<FormData>| {
                    if !on_input.call(evt.value()) {
                        text.set(accepted.to_string());
                    }
                },
            }
            if let Some(error) = &props.error {
                div {
                    style: "margin-top: 0.25rem; font-size: 0.85rem; color: #fca5a5;",
                    "{error}"
                }
            }
        }
    }
}

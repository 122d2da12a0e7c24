//! Section heading with an optional subtitle line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Rendered under the title when non-empty, e.g. "Temperature (°C) vs PM 2.5 (µg)"
    #[props(default = String::new())]
    pub subtitle: String,
    #[props(default = "#ffffff".to_string())]
    pub color: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 1rem;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 1.25rem; color: {props.color};",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 0.85rem; color: #94a3b8;",
                    "{props.subtitle}"
                }
            }
        }
    }
}

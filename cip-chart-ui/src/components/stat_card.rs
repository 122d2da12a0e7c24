//! A single labeled statistic on the current-conditions view.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// Uppercase caption, e.g. "Temp"
    pub label: String,
    /// Already formatted value
    pub value: String,
    /// Caption color
    #[props(default = "#94a3b8".to_string())]
    pub color: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "background: rgba(255,255,255,0.03); padding: 1.5rem; border-radius: 16px;",
            div {
                style: "color: {props.color}; margin-bottom: 0.5rem; text-transform: uppercase; font-size: 0.8rem; letter-spacing: 1px;",
                "{props.label}"
            }
            div {
                style: "font-size: 2.5rem; font-weight: bold;",
                "{props.value}"
            }
        }
    }
}

//! Inline error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: rgba(239,68,68,0.12); color: #fca5a5; border-radius: 12px; border: 1px solid rgba(239,68,68,0.4);",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

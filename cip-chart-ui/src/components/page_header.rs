//! Title block at the top of the dashboard.

use dioxus::prelude::*;

pub const TITLE: &str = "Climate Intelligence Platform";
pub const SUBTITLE: &str = "Real-Time Environmental Monitoring & AI Forecasting";

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header {
            style: "text-align: center; margin-bottom: 1.5rem;",
            h1 {
                style: "margin: 0; font-size: 2.25rem;",
                "{TITLE}"
            }
            p {
                style: "margin: 0.5rem 0 0 0; color: #94a3b8;",
                "{SUBTITLE}"
            }
        }
    }
}

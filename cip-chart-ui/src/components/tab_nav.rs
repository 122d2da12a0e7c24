//! Tab bar switching between the dashboard views.

use crate::state::{AppState, Tab};
use dioxus::prelude::*;

#[component]
pub fn TabNav() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        nav {
            style: "display: flex; gap: 8px; justify-content: center; margin-bottom: 2rem;",
            for tab in Tab::ALL {
                button {
                    key: "{tab.label()}",
                    style: if tab == active {
                        "padding: 10px 18px; border-radius: 12px; border: 1px solid #3b82f6; background: rgba(59,130,246,0.25); color: white; cursor: pointer;"
                    } else {
                        "padding: 10px 18px; border-radius: 12px; border: 1px solid transparent; background: transparent; color: #94a3b8; cursor: pointer;"
                    },
                    onclick: move |_| state.active_tab.set(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}

//! Toggle between the two prediction modes.

use cip_core::prediction::PredictionMode;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ModeToggleProps {
    pub mode: PredictionMode,
    pub on_change: EventHandler<PredictionMode>,
}

#[component]
pub fn ModeToggle(props: ModeToggleProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 1rem; margin-bottom: 2rem; justify-content: center;",
            for mode in PredictionMode::ALL {
                button {
                    key: "{mode}",
                    style: if mode == props.mode { "opacity: 1;" } else { "opacity: 0.5;" },
                    onclick: move |_| props.on_change.call(mode),
                    "{mode.label()}"
                }
            }
        }
    }
}

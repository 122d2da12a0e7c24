//! Sidebar list of city buttons.

use cip_core::City;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CityListProps {
    pub selected: City,
    pub on_select: EventHandler<City>,
}

/// Vertical list of one button per city, highlighting the selected one.
#[component]
pub fn CityList(props: CityListProps) -> Element {
    rsx! {
        div {
            style: "padding: 1.5rem; display: flex; flex-direction: column; gap: 0.5rem; max-height: 600px; overflow-y: auto; background: rgba(255,255,255,0.03); border-radius: 16px;",
            h3 {
                style: "margin-top: 0; margin-bottom: 1rem; color: #60a5fa;",
                "Cities"
            }
            for city in City::ALL {
                button {
                    key: "{city}",
                    style: if city == props.selected {
                        "background: rgba(59,130,246,0.2); border: 1px solid #3b82f6; color: white; padding: 10px 15px; border-radius: 12px; text-align: left; cursor: pointer; font-weight: bold;"
                    } else {
                        "background: transparent; border: 1px solid transparent; color: white; padding: 10px 15px; border-radius: 12px; text-align: left; cursor: pointer;"
                    },
                    onclick: move |_| props.on_select.call(city),
                    "{city}"
                }
            }
        }
    }
}

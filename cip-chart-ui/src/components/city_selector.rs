//! Dropdown selector for choosing a city.

use cip_core::City;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CitySelectorProps {
    /// Currently selected city
    pub selected: City,
    /// Called with the newly chosen city
    pub on_select: EventHandler<City>,
}

/// City dropdown. Unknown values coming back from the DOM are ignored.
#[component]
pub fn CitySelector(props: CitySelectorProps) -> Element {
    let on_change = move |evt: Event<FormData>| match evt.value().parse::<City>() {
        Ok(city) => props.on_select.call(city),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        select {
            id: "city-select",
            style: "width: 200px;",
            onchange: on_change,
            for city in City::ALL {
                option {
                    value: "{city}",
                    selected: city == props.selected,
                    "{city}"
                }
            }
        }
    }
}

//! Grid of forecast day cards.

use super::ForecastCard;
use cip_core::weather::ForecastCard as Card;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ForecastOutlookProps {
    pub cards: Vec<Card>,
}

/// Cards are keyed by position: the backend does not guarantee unique dates.
#[component]
pub fn ForecastOutlook(props: ForecastOutlookProps) -> Element {
    let days = props.cards.len();
    rsx! {
        h3 { style: "margin: 0;", "{days}-Day Outlook" }
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem;",
            for (i, card) in props.cards.iter().cloned().enumerate() {
                ForecastCard { key: "{i}", card }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cip_core::weather::ForecastDay;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DAYS: AtomicUsize = AtomicUsize::new(1);

    fn day(date: &str, temperature: f64) -> Card {
        ForecastDay {
            date: date.to_string(),
            temperature,
            wind_speed: 5.0,
            rain: 0.0,
            precipitation_probability: 10.0,
        }
        .card()
    }

    #[component]
    fn Outlook() -> Element {
        let cards = (0..DAYS.load(Ordering::SeqCst))
            .map(|i| day("2025-06-01", 20.0 + i as f64))
            .collect::<Vec<_>>();
        rsx! { ForecastOutlook { cards } }
    }

    #[test]
    fn test_repeated_dates_render() {
        DAYS.store(1, Ordering::SeqCst);
        let mut dom = VirtualDom::new(Outlook);
        dom.rebuild_in_place();

        for days in [2, 3, 1] {
            DAYS.store(days, Ordering::SeqCst);
            dom.mark_dirty(ScopeId::APP);
            dom.render_immediate(&mut NoOpMutations);
        }
    }
}

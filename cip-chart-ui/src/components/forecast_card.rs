//! One day of the forecast outlook.

use cip_core::weather::ForecastCard as Card;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ForecastCardProps {
    pub card: Card,
}

#[component]
pub fn ForecastCard(props: ForecastCardProps) -> Element {
    let card = props.card;
    rsx! {
        div {
            style: "padding: 1.5rem; text-align: center; background: rgba(255,255,255,0.03); border-radius: 16px;",
            div {
                style: "font-size: 1.1rem; font-weight: bold; margin-bottom: 0.5rem; color: #60a5fa;",
                "{card.date}"
            }
            div {
                style: "font-size: 2.5rem; font-weight: bold;",
                "{card.temperature}"
            }
            div {
                style: "margin-top: 1rem; display: flex; flex-direction: column; gap: 5px; font-size: 0.9rem; color: #94a3b8;",
                span { "{card.wind}" }
                span { "{card.rain}" }
                span { "{card.chance}" }
            }
        }
    }
}

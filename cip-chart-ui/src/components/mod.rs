//! Reusable Dioxus RSX components for the dashboard views.

mod chart_container;
mod chart_header;
mod city_list;
mod city_selector;
mod error_display;
mod forecast_card;
mod forecast_outlook;
mod loading_spinner;
mod mode_toggle;
mod number_field;
mod page_header;
mod stat_card;
mod tab_nav;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use city_list::CityList;
pub use city_selector::CitySelector;
pub use error_display::ErrorDisplay;
pub use forecast_card::ForecastCard;
pub use forecast_outlook::ForecastOutlook;
pub use loading_spinner::LoadingSpinner;
pub use mode_toggle::ModeToggle;
pub use number_field::NumberField;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use tab_nav::TabNav;

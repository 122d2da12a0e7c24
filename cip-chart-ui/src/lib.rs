//! Shared Dioxus components and D3.js bridge for the climate dashboard.
//!
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`
//! - `state`: `AppState` with the API client and the active tab
//! - `components`: reusable RSX pieces (city pickers, cards, chart containers)

pub mod components;
pub mod js_bridge;
pub mod state;

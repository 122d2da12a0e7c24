//! Application state managed via Dioxus context.
//!
//! `AppState` holds what every view shares: the API client and the active
//! tab. Each view keeps its own controller in a local signal, so views never
//! see each other's data. Child components retrieve the state with
//! `use_context::<AppState>()`.

use cip_core::client::ApiClient;
use cip_core::ApiConfig;
use dioxus::prelude::*;

/// Tabs of the dashboard, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Analytics,
    Predict,
    Analysis,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Analytics, Tab::Predict, Tab::Analysis];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Analytics => "Analytics",
            Tab::Predict => "AI Predictions",
            Tab::Analysis => "Cluster Analysis",
        }
    }
}

/// Base path override (`CIP_API_URL`), read when the app is compiled.
pub fn configured_base_path() -> Option<&'static str> {
    option_env!("CIP_API_URL")
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client (None if the configured base URL is unusable)
    pub client: Signal<Option<ApiClient>>,
    /// Currently visible tab
    pub active_tab: Signal<Tab>,
    /// Error message if something went wrong at startup
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState, building the API client from the configured base path.
    pub fn new() -> Self {
        let config = ApiConfig::resolve(configured_base_path());
        let (client, error_msg) = match ApiClient::new(config) {
            Ok(client) => {
                log::info!("API base URL: {}", client.base_url());
                (Some(client), None)
            }
            Err(e) => {
                log::error!("Failed to create API client: {}", e);
                (None, Some(format!("API client unavailable: {}", e)))
            }
        };
        Self {
            client: Signal::new(client),
            active_tab: Signal::new(Tab::default()),
            error_msg: Signal::new(error_msg),
        }
    }
}

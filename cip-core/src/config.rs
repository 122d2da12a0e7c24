//! API base path and timeout.

use std::time::Duration;

/// Base path used when no override is configured.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Per-request timeout. A request that takes longer fails as a timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Origin a relative base path is joined onto outside the browser.
pub const DEFAULT_NATIVE_ORIGIN: &str = "http://127.0.0.1:8000";

/// Environment variable carrying the base path override.
pub const API_URL_ENV: &str = "CIP_API_URL";

/// Read-only client configuration, shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_path: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

impl ApiConfig {
    /// Explicit override if present and non-blank, else [`DEFAULT_BASE_PATH`].
    pub fn resolve(override_path: Option<&str>) -> Self {
        let base_path = override_path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_BASE_PATH)
            .trim_end_matches('/')
            .to_string();
        Self {
            base_path,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Whether the base path already names a scheme and host.
    pub fn is_absolute(&self) -> bool {
        self.base_path.starts_with("http://") || self.base_path.starts_with("https://")
    }

    /// Absolute base URL, joining a relative base path onto `origin`.
    pub fn base_url(&self, origin: &str) -> String {
        if self.is_absolute() {
            self.base_path.clone()
        } else {
            let path = self.base_path.trim_start_matches('/');
            let origin = origin.trim_end_matches('/');
            if path.is_empty() {
                origin.to_string()
            } else {
                format!("{}/{}", origin, path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let config = ApiConfig::resolve(Some("https://climate.example.com/api/"));
        assert_eq!(config.base_path, "https://climate.example.com/api");
        assert!(config.is_absolute());
        assert_eq!(
            config.base_url(DEFAULT_NATIVE_ORIGIN),
            "https://climate.example.com/api"
        );
    }

    #[test]
    fn test_missing_or_blank_override_uses_default() {
        assert_eq!(ApiConfig::resolve(None).base_path, DEFAULT_BASE_PATH);
        assert_eq!(ApiConfig::resolve(Some("  ")).base_path, DEFAULT_BASE_PATH);
        assert_eq!(ApiConfig::default().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_relative_base_joins_origin() {
        let config = ApiConfig::default();
        assert!(!config.is_absolute());
        assert_eq!(
            config.base_url("http://localhost:5173/"),
            "http://localhost:5173/api"
        );
        let root = ApiConfig::resolve(Some("/"));
        assert_eq!(root.base_url("http://localhost:8000"), "http://localhost:8000");
    }
}

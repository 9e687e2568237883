//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_core::window::DASHBOARD_WINDOW_MONTHS;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON document used to seed the in-memory stores.
    pub fixtures_path: Option<PathBuf>,
    /// Base URL embedded in API code samples.
    pub api_base_url: String,
    /// Width of the subscriber chart window in calendar months.
    pub analytics_window_months: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            fixtures_path: None,
            api_base_url: "https://api.example.com".to_string(),
            analytics_window_months: DASHBOARD_WINDOW_MONTHS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            fixtures_path: env::var("FIXTURES_PATH").ok().map(PathBuf::from),
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            analytics_window_months: env::var("ANALYTICS_WINDOW_MONTHS")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|&m| m > 0)
                .unwrap_or(defaults.analytics_window_months),
        }
    }
}

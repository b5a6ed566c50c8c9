//! Configuration module for the squadhub client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote store API
    pub api_base_url: Url,
    /// Key unlocking the admin affordances (UI visibility only)
    pub admin_key: Option<String>,
    /// URL of the dashboard page, carrying the admin query parameter
    pub page_url: Option<Url>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("SQUADHUB_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/api".to_string())
            .parse()
            .expect("Invalid SQUADHUB_API_BASE_URL format");

        let admin_key = env::var("SQUADHUB_ADMIN_KEY").ok();

        let page_url = env::var("SQUADHUB_PAGE_URL")
            .ok()
            .map(|s| s.parse().expect("Invalid SQUADHUB_PAGE_URL format"));

        let log_level = env::var("SQUADHUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            admin_key,
            page_url,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SQUADHUB_API_BASE_URL");
        env::remove_var("SQUADHUB_ADMIN_KEY");
        env::remove_var("SQUADHUB_PAGE_URL");
        env::remove_var("SQUADHUB_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:8080/api");
        assert!(config.admin_key.is_none());
        assert!(config.page_url.is_none());
        assert_eq!(config.log_level, "info");
    }
}

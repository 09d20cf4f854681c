//! Dashboard configuration

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Keys used in browser key-value storage
pub struct StorageKeys;

impl StorageKeys {
    /// Bearer token returned by the sign-in endpoint
    pub const TOKEN: &'static str = "token";

    /// Last known display name
    pub const USERNAME: &'static str = "username";

    /// Last known email
    pub const USER_EMAIL: &'static str = "userEmail";
}

/// Runtime configuration for the dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL. Empty means "same origin as the page".
    pub base_url: String,
    /// Interval between token verification probes
    pub refresh_interval_ms: u64,
    /// Delay applied to search inputs before a list is refetched
    pub search_debounce_ms: u32,
    /// Delay before a saved scroll position is restored after render
    pub scroll_restore_delay_ms: u32,
    /// Page size used when a list is first opened
    pub default_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            refresh_interval_ms: 5 * 60 * 1000,
            search_debounce_ms: 400,
            scroll_restore_delay_ms: 50,
            default_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Page sizes offered by list views
    pub const PAGE_SIZES: [u32; 3] = [10, 20, 50];

    /// Build the configuration baked in at compile time.
    ///
    /// `FISCAMOTO_API_URL` sets the backend base URL; everything else uses the
    /// defaults.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("FISCAMOTO_API_URL")
                .unwrap_or_default()
                .to_string(),
            ..Self::default()
        }
    }

    /// Resolve the base URL, using `origin` when none was configured
    pub fn api_url(&self, origin: &str) -> CoreResult<String> {
        let raw = if self.base_url.is_empty() {
            origin
        } else {
            self.base_url.as_str()
        };

        let url = Url::parse(raw)
            .map_err(|e| CoreError::invalid_config(format!("invalid base URL '{raw}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::invalid_config(format!(
                "unsupported scheme '{}' in base URL",
                url.scheme()
            )));
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.refresh_interval(), Duration::from_secs(300));
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_api_url_falls_back_to_origin() {
        let config = AppConfig::default();
        assert_eq!(
            config.api_url("https://panel.example.pe").unwrap(),
            "https://panel.example.pe"
        );
    }

    #[test]
    fn test_api_url_prefers_configured_value() {
        let config = AppConfig {
            base_url: "http://localhost:3000/api/".into(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.api_url("https://ignored.example").unwrap(),
            "http://localhost:3000/api"
        );
    }

    #[test]
    fn test_api_url_rejects_bad_scheme() {
        let config = AppConfig {
            base_url: "ftp://files.example".into(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.api_url(""),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"base_url":"http://api.local","default_page_size":20}"#)
                .unwrap();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.search_debounce_ms, 400);
    }
}

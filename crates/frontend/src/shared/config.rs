//! Client configuration.
//!
//! The defaults are embedded in the bundle. At startup `init()` tries to fetch
//! `/static/config.toml` from the serving origin; a missing or malformed file
//! falls back to the embedded defaults with a warning.

use gloo_net::http::Request;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub extraction: ExtractionConfig,
    pub monitor: MonitorConfig,
    pub dashboard: DashboardConfig,
    pub toasts: ToastConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty means "same origin as the page"
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u32,
    pub min_query_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    pub step_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    pub health_interval_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub stats_refresh_secs: u32,
    pub activities_refresh_secs: u32,
    pub inventory_refresh_secs: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    pub success_ms: u32,
    pub error_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[search]
debounce_ms = 300
min_query_len = 2

[extraction]
step_ms = 700

[monitor]
health_interval_secs = 10

[dashboard]
stats_refresh_secs = 30
activities_refresh_secs = 120
inventory_refresh_secs = 300

[toasts]
success_ms = 3000
error_ms = 5000
"#;

const REMOTE_CONFIG_PATH: &str = "/static/config.toml";

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { step_ms: 700 }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            health_interval_secs: 10,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            stats_refresh_secs: 30,
            activities_refresh_secs: 120,
            inventory_refresh_secs: 300,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_ms: 3000,
            error_ms: 5000,
        }
    }
}

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn embedded() -> Self {
        match Self::parse(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Embedded configuration is invalid: {}", e);
                Self::default()
            }
        }
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Current configuration; the embedded defaults until `init()` has run.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::embedded)
}

/// Load the optional override file. Must run before the app is mounted.
pub async fn init() {
    let loaded = match fetch_remote().await {
        Ok(config) => {
            log::info!("Loaded configuration from {}", REMOTE_CONFIG_PATH);
            config
        }
        Err(e) => {
            log::warn!("{}; using embedded configuration", e);
            AppConfig::embedded()
        }
    };

    if CONFIG.set(loaded).is_err() {
        log::warn!("Configuration was read before init(); override ignored");
    }
}

async fn fetch_remote() -> Result<AppConfig, String> {
    let response = Request::get(REMOTE_CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Config request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "{} not available (HTTP {})",
            REMOTE_CONFIG_PATH,
            response.status()
        ));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read {}: {}", REMOTE_CONFIG_PATH, e))?;

    AppConfig::parse(&text).map_err(|e| format!("Invalid {}: {}", REMOTE_CONFIG_PATH, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.extraction.step_ms, 700);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = AppConfig::parse(
            r#"
[api]
base_url = "http://192.168.1.20:8000"

[search]
min_query_len = 3
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://192.168.1.20:8000");
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.toasts.error_ms, 5000);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(AppConfig::parse("[search]\ndebounce_ms = \"fast\"").is_err());
    }
}

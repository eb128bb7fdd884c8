//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::search::{PriceDefaults, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use storefront_data::TimeoutConfig;
use storefront_session::SessionConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Storefront API access.
    #[serde(default)]
    pub api: ApiConfig,

    /// Search and paging behavior.
    #[serde(default)]
    pub search: SearchConfig,

    /// Transient notices.
    #[serde(default)]
    pub notices: NoticeConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Session settings derived from this config.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            debounce: Duration::from_millis(self.search.debounce_ms),
            page_size: self.search.page_size.max(1),
            price_defaults: PriceDefaults {
                min: self.search.default_min_price,
                max: self.search.default_max_price,
            },
            discard_stale_responses: self.search.discard_stale_responses,
            notice_ttl: Duration::from_millis(self.notices.ttl_ms),
            ..SessionConfig::default()
        }
    }

    /// HTTP timeouts derived from this config.
    pub fn timeout(&self) -> TimeoutConfig {
        TimeoutConfig::from_total(Duration::from_millis(self.api.timeout_ms))
    }

    /// Check the config for values that cannot work. Returns one message
    /// per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("api.base_url '{}' must start with http:// or https://", url));
        }
        if self.api.timeout_ms == 0 {
            errors.push("api.timeout_ms must be greater than 0".to_string());
        }
        if self.search.page_size == 0 {
            errors.push("search.page_size must be at least 1".to_string());
        }
        if self.search.default_min_price > self.search.default_max_price {
            errors.push(format!(
                "search.default_min_price ({}) exceeds search.default_max_price ({})",
                self.search.default_min_price, self.search.default_max_price
            ));
        }

        errors
    }
}

/// Storefront API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet window after the last keystroke, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Lower price bound when the min input is empty.
    #[serde(default = "default_min_price")]
    pub default_min_price: i64,

    /// Upper price bound when the max input is empty or zero.
    #[serde(default = "default_max_price")]
    pub default_max_price: i64,

    /// Drop search responses older than the newest one applied.
    #[serde(default = "default_true")]
    pub discard_stale_responses: bool,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_page_size() -> usize {
    12
}

fn default_min_price() -> i64 {
    DEFAULT_MIN_PRICE
}

fn default_max_price() -> i64 {
    DEFAULT_MAX_PRICE
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
            default_min_price: default_min_price(),
            default_max_price: default_max_price(),
            discard_stale_responses: true,
        }
    }
}

/// Notice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// How long a notice stays visible, in milliseconds.
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

fn default_ttl_ms() -> u64 {
    3000
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_ttl_ms(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# Storefront configuration

[api]
base_url = "{base_url}"
timeout_ms = 10000

[search]
debounce_ms = 300
page_size = 12
default_min_price = 0
default_max_price = 1000
# Set to false to let whichever response arrives last win.
discard_stale_responses = true

[notices]
ttl_ms = 3000
"#
    )
}

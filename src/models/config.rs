//! Configuration model loaded from external sources.

use config::{Config, ConfigError};
use serde::Deserialize;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;
pub const DEFAULT_NOTIFICATION_PAGE_SIZE: usize = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_notification_page_size() -> usize {
    DEFAULT_NOTIFICATION_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_rows_per_page() -> usize {
    DEFAULT_ROWS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the repository, stores and widgets.
pub struct AppConfig {
    /// Base URL of the REST backend, e.g. `https://erp.example.com/api`.
    pub api_base_url: String,
    /// JSON file written by the login flow holding the token and the user.
    #[serde(default)]
    pub auth_state_path: Option<String>,
    #[serde(default = "default_poll_interval_ms")]
    pub notification_poll_interval_ms: u64,
    #[serde(default = "default_notification_page_size")]
    pub notification_page_size: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_rows_per_page")]
    pub table_rows_per_page: usize,
}

impl AppConfig {
    /// Builds a config pointing at `api_base_url` with every other key defaulted.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            auth_state_path: None,
            notification_poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            notification_page_size: DEFAULT_NOTIFICATION_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            table_rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
        .normalized()
    }

    /// Loads `config/default.yaml`, then `config/{app_env}.yaml`, then `APP_*`
    /// environment variables.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<AppConfig>()
            .map(AppConfig::normalized)
    }

    /// Strips the trailing slash of the base URL and replaces zero values.
    pub fn normalized(mut self) -> Self {
        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if self.notification_poll_interval_ms == 0 {
            self.notification_poll_interval_ms = DEFAULT_POLL_INTERVAL_MS;
        }
        if self.notification_page_size == 0 {
            self.notification_page_size = DEFAULT_NOTIFICATION_PAGE_SIZE;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
        }
        if self.table_rows_per_page == 0 {
            self.table_rows_per_page = DEFAULT_ROWS_PER_PAGE;
        }
        self
    }
}

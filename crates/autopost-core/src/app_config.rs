use std::path::PathBuf;

use chrono_tz::Tz;

use crate::selection::BatchSize;
use crate::store::EcommercePlatform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog_path: PathBuf,
    pub brand_path: Option<PathBuf>,
    /// Zone used for "now" and for the calendar dates of scheduled posts.
    pub timezone: Tz,
    pub generation_delay_ms: u64,
    pub default_batch_size: BatchSize,
    pub store_platform: Option<EcommercePlatform>,
    pub store_url: Option<String>,
    /// Opaque store credential. Never logged.
    pub store_api_key: Option<String>,
    pub store_request_timeout_secs: u64,
    pub store_user_agent: String,
    pub store_page_limit: u32,
    pub store_inter_request_delay_ms: u64,
    pub store_max_retries: u32,
    pub store_retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field("brand_path", &self.brand_path)
            .field("timezone", &self.timezone)
            .field("generation_delay_ms", &self.generation_delay_ms)
            .field("default_batch_size", &self.default_batch_size)
            .field("store_platform", &self.store_platform)
            .field("store_url", &self.store_url)
            .field(
                "store_api_key",
                &self.store_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "store_request_timeout_secs",
                &self.store_request_timeout_secs,
            )
            .field("store_user_agent", &self.store_user_agent)
            .field("store_page_limit", &self.store_page_limit)
            .field(
                "store_inter_request_delay_ms",
                &self.store_inter_request_delay_ms,
            )
            .field("store_max_retries", &self.store_max_retries)
            .field(
                "store_retry_backoff_base_ms",
                &self.store_retry_backoff_base_ms,
            )
            .finish()
    }
}

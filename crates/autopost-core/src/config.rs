use std::path::PathBuf;

use chrono_tz::Tz;

use crate::app_config::{AppConfig, Environment};
use crate::selection::BatchSize;
use crate::store::EcommercePlatform;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config backed by `./config/catalog.yaml`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("AUTOPOST_ENV", "development"))?;
    let log_level = or_default("AUTOPOST_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "AUTOPOST_CATALOG_PATH",
        "./config/catalog.yaml",
    ));
    let brand_path = optional("AUTOPOST_BRAND_PATH").map(PathBuf::from);

    let timezone = or_default("AUTOPOST_TIMEZONE", "America/Santiago")
        .parse::<Tz>()
        .map_err(|e| invalid("AUTOPOST_TIMEZONE", e.to_string()))?;

    let generation_delay_ms = parse_u64("AUTOPOST_GENERATION_DELAY_MS", "2000")?;

    let raw_batch = or_default("AUTOPOST_DEFAULT_BATCH_SIZE", "4");
    let default_batch_size = raw_batch
        .parse::<usize>()
        .map_err(|e| e.to_string())
        .and_then(|n| BatchSize::try_from(n).map_err(|e| e.to_string()))
        .map_err(|reason| invalid("AUTOPOST_DEFAULT_BATCH_SIZE", reason))?;

    let store_platform = optional("AUTOPOST_STORE_PLATFORM")
        .map(|raw| raw.parse::<EcommercePlatform>())
        .transpose()
        .map_err(|e| invalid("AUTOPOST_STORE_PLATFORM", e.to_string()))?;
    let store_url = optional("AUTOPOST_STORE_URL");
    let store_api_key = optional("AUTOPOST_STORE_API_KEY");

    let store_request_timeout_secs = parse_u64("AUTOPOST_STORE_REQUEST_TIMEOUT_SECS", "30")?;
    let store_user_agent = or_default("AUTOPOST_STORE_USER_AGENT", "autopost/0.1 (catalog-sync)");
    let store_page_limit = parse_u32("AUTOPOST_STORE_PAGE_LIMIT", "250")?;
    let store_inter_request_delay_ms = parse_u64("AUTOPOST_STORE_INTER_REQUEST_DELAY_MS", "250")?;
    let store_max_retries = parse_u32("AUTOPOST_STORE_MAX_RETRIES", "3")?;
    let store_retry_backoff_base_ms = parse_u64("AUTOPOST_STORE_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        brand_path,
        timezone,
        generation_delay_ms,
        default_batch_size,
        store_platform,
        store_url,
        store_api_key,
        store_request_timeout_secs,
        store_user_agent,
        store_page_limit,
        store_inter_request_delay_ms,
        store_max_retries,
        store_retry_backoff_base_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AUTOPOST_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

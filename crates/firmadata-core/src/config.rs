use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_REGISTRY_BASE_URL: &str = "https://data.brreg.no/enhetsregisteret/api/enheter";
pub const DEFAULT_DIRECTORY_BASE_URL: &str = "https://www.gulesider.no/firma";
pub const DEFAULT_DIRECTORY_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_ADS_BASE_URL: &str = "https://graph.facebook.com/v18.0/ads_archive";

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
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    // A zero timeout would fail every outbound call immediately.
    let parse_optional_secs = |var: &str| -> Result<Option<u64>, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<u64>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            }),
            Ok(secs) => Ok(Some(secs)),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let env = parse_environment(&or_default("FIRMADATA_ENV", "development"));
    let bind_addr = parse_addr("FIRMADATA_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("FIRMADATA_LOG_LEVEL", "info");

    // Base URLs are validated when the source clients are built.
    let registry_base_url = or_default("FIRMADATA_REGISTRY_BASE_URL", DEFAULT_REGISTRY_BASE_URL);
    let directory_base_url = or_default("FIRMADATA_DIRECTORY_BASE_URL", DEFAULT_DIRECTORY_BASE_URL);
    let directory_user_agent = or_default(
        "FIRMADATA_DIRECTORY_USER_AGENT",
        DEFAULT_DIRECTORY_USER_AGENT,
    );
    let ads_base_url = or_default("FIRMADATA_ADS_BASE_URL", DEFAULT_ADS_BASE_URL);
    let request_timeout_secs = parse_optional_secs("FIRMADATA_REQUEST_TIMEOUT_SECS")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        registry_base_url,
        directory_base_url,
        directory_user_agent,
        ads_base_url,
        request_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

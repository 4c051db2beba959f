use crate::app_config::{AppConfig, LayoutMode};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
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
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("NEWSDESK_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("NEWSDESK_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("NEWSDESK_LOG_LEVEL", "info");

    let feeds_path = lookup("NEWSDESK_FEEDS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let fetch_timeout_secs = or_default("NEWSDESK_FETCH_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("NEWSDESK_FETCH_TIMEOUT_SECS", e.to_string()))?;
    if fetch_timeout_secs == 0 {
        return Err(invalid(
            "NEWSDESK_FETCH_TIMEOUT_SECS",
            "must be at least 1 second".to_string(),
        ));
    }

    let user_agent = or_default("NEWSDESK_USER_AGENT", "newsdesk/0.1 (headline-sentiment)");

    let layout_mode = parse_layout_mode(&or_default("NEWSDESK_LAYOUT_MODE", "sidebar"))?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        feeds_path,
        fetch_timeout_secs,
        user_agent,
        layout_mode,
    })
}

/// Parse a string into a `LayoutMode` variant.
///
/// Matching is case-insensitive. Unrecognized values are rejected.
fn parse_layout_mode(s: &str) -> Result<LayoutMode, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "sidebar" => Ok(LayoutMode::Sidebar),
        "main" => Ok(LayoutMode::Main),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSDESK_LAYOUT_MODE".to_string(),
            reason: format!("unknown layout mode '{other}'; expected 'sidebar' or 'main'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

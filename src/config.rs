//! Frontend Configuration
//!
//! Build-time overrides (read with `option_env!`):
//! - `FEATURE_STORE_URL`: store base URL, default `{window origin}/api`
//! - `FEATURE_LOG_LEVEL`: `error` | `warn` | `info` | `debug` | `trace`, default `info`

use feature_sync::StoreConfig;
use log::Level;

const DEFAULT_API_PATH: &str = "/api";

pub fn store_config() -> StoreConfig {
    if let Some(url) = option_env!("FEATURE_STORE_URL") {
        return StoreConfig::new(url);
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| StoreConfig::new(format!("{}{}", origin, DEFAULT_API_PATH)))
        .unwrap_or_default()
}

pub fn log_level() -> Level {
    option_env!("FEATURE_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::Info)
}

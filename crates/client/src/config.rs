use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "FLEETDESK_API_URL";

/// Parse config file contents. Malformed input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse config: {e}; using defaults");
        AppConfig::default()
    })
}

/// Read the configuration once and keep it for the process lifetime.
/// Safe to call multiple times; only the first call has effect.
///
/// Native builds read `config.toml` from the working directory and honour
/// `.env` / `FLEETDESK_API_URL`. Web builds embed the file at compile time.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config_source();
        apply_env_overrides(&mut config);
        tracing::debug!(
            base_url = %config.api.base_url,
            page_size = config.tables.page_size,
            "console configuration loaded"
        );
        config
    })
}

/// The loaded configuration, or defaults if `load_config()` has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_source() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not readable ({e}); using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_source() -> AppConfig {
    parse_config(include_str!("../../../config.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_env_overrides(config: &mut AppConfig) {
    let _ = dotenvy::dotenv();
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            config.api.base_url = url;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(url) = option_env!("FLEETDESK_API_URL") {
        config.api.base_url = url.to_string();
    }
}

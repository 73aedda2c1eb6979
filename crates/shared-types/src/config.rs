use serde::{Deserialize, Serialize};

use crate::common::DEFAULT_PAGE_SIZE;

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout on native targets; the browser applies its own.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Live dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    /// Whether the dashboard subscribes to the live feed after the snapshot.
    #[serde(default = "default_live")]
    pub live: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            live: default_live(),
        }
    }
}

fn default_live() -> bool {
    true
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tables: TableConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

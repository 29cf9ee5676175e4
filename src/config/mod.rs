// src/config/mod.rs
//
// Runtime configuration
//
// Layering: built-in defaults < TOML file < CURATOR_* environment variables.
// Base URLs may point at a pass-through CORS proxy; the crate treats it as
// the upstream API.

pub mod load;

pub use load::{apply_env_overrides, config_path, load, load_from_path, ConfigLayer};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Page size both museum APIs are queried with
pub const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratorConfig {
    pub vam: SourceConfig,
    pub cleveland: SourceConfig,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            vam: SourceConfig {
                base_url: "https://api.vam.ac.uk/v2/".to_string(),
                page_size: DEFAULT_PAGE_SIZE,
            },
            cleveland: SourceConfig {
                base_url: "https://openaccess-api.clevelandart.org/api/artworks/".to_string(),
                page_size: DEFAULT_PAGE_SIZE,
            },
            request_timeout_secs: 30,
            user_agent: format!("museum-curator/{}", env!("CARGO_PKG_VERSION")),
            log_level: "info".to_string(),
        }
    }
}

impl CuratorConfig {
    pub fn validate(&self) -> AppResult<()> {
        for (name, source) in [("vam", &self.vam), ("cleveland", &self.cleveland)] {
            if source.base_url.trim().is_empty() {
                return Err(AppError::Config(format!("{}.base_url cannot be empty", name)));
            }
            if source.page_size == 0 {
                return Err(AppError::Config(format!(
                    "{}.page_size must be greater than zero",
                    name
                )));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

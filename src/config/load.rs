use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::CuratorConfig;
use crate::error::{AppError, AppResult};

/// Partial config as read from a file; absent keys keep the defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub vam: SourceLayer,
    pub cleveland: SourceLayer,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SourceLayer {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
}

impl ConfigLayer {
    pub fn apply_to(self, config: &mut CuratorConfig) {
        if let Some(url) = self.vam.base_url {
            config.vam.base_url = url;
        }
        if let Some(size) = self.vam.page_size {
            config.vam.page_size = size;
        }
        if let Some(url) = self.cleveland.base_url {
            config.cleveland.base_url = url;
        }
        if let Some(size) = self.cleveland.page_size {
            config.cleveland.page_size = size;
        }
        if let Some(timeout) = self.request_timeout_secs {
            config.request_timeout_secs = timeout;
        }
        if let Some(agent) = self.user_agent {
            config.user_agent = agent;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

/// Default config file location: `<config_dir>/museum-curator/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("museum-curator").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// if present, otherwise built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> AppResult<CuratorConfig> {
    let mut config = match explicit {
        Some(path) => load_from_path(path)?,
        None => match config_path().filter(|path| path.exists()) {
            Some(path) => load_from_path(&path)?,
            None => CuratorConfig::default(),
        },
    };
    apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Read a TOML file and merge it over the defaults
pub fn load_from_path(path: &Path) -> AppResult<CuratorConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let layer: ConfigLayer = toml::from_str(&contents)?;

    let mut config = CuratorConfig::default();
    layer.apply_to(&mut config);
    Ok(config)
}

pub fn apply_env_overrides(config: &mut CuratorConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

fn apply_overrides_from<F>(config: &mut CuratorConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let value = |key: &str| {
        lookup(key)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
    };

    if let Some(url) = value("CURATOR_VAM_BASE_URL") {
        config.vam.base_url = url;
    }

    if let Some(url) = value("CURATOR_CLEVELAND_BASE_URL") {
        config.cleveland.base_url = url;
    }

    if let Some(raw) = value("CURATOR_PAGE_SIZE") {
        match raw.parse::<u32>() {
            Ok(size) => {
                config.vam.page_size = size;
                config.cleveland.page_size = size;
            }
            Err(err) => log::warn!("invalid CURATOR_PAGE_SIZE, ignoring: {}", err),
        }
    }

    if let Some(raw) = value("CURATOR_TIMEOUT_SECS") {
        match raw.parse::<u64>() {
            Ok(secs) => config.request_timeout_secs = secs,
            Err(err) => log::warn!("invalid CURATOR_TIMEOUT_SECS, ignoring: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let file = write_config(
            r#"
            request_timeout_secs = 5

            [vam]
            page_size = 30
            "#,
        );

        let config = load_from_path(file.path()).unwrap();
        let defaults = CuratorConfig::default();

        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.vam.page_size, 30);
        assert_eq!(config.vam.base_url, defaults.vam.base_url);
        assert_eq!(config.cleveland, defaults.cleveland);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(load(Some(&missing)), Err(AppError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("request_timeout_secs = \"soon\"");
        assert!(load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CURATOR_VAM_BASE_URL", "http://localhost:8888/vam/"),
            ("CURATOR_PAGE_SIZE", "20"),
            ("CURATOR_TIMEOUT_SECS", "not-a-number"),
        ]);

        let mut config = CuratorConfig::default();
        apply_overrides_from(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.vam.base_url, "http://localhost:8888/vam/");
        assert_eq!(config.vam.page_size, 20);
        assert_eq!(config.cleveland.page_size, 20);
        assert_eq!(config.request_timeout_secs, 30);
    }
}

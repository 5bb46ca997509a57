use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use dashboard_core::source::{DEFAULT_FETCH_LIMIT, DEFAULT_SOURCE_URL};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_url: String,
    pub fetch_limit: u32,
    pub rng_seed: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            rng_seed: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    source_url: Option<String>,
    fetch_limit: Option<u32>,
    rng_seed: Option<u64>,
    log_filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid source url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Defaults, then the config file, then the environment.
///
/// An explicit `config_path` must exist; the default `dashboard.toml` is
/// optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    if required || path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        apply_file_settings(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    validate(&settings)?;
    Ok(settings)
}

pub(crate) fn apply_file_settings(settings: &mut Settings, raw: &str) -> Result<(), ConfigError> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.source_url {
        settings.source_url = v;
    }
    if let Some(v) = file_cfg.fetch_limit {
        settings.fetch_limit = v;
    }
    if let Some(v) = file_cfg.rng_seed {
        settings.rng_seed = Some(v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

/// Later keys win, so the `APP__` spelling overrides the short one.
pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    for key in ["HR_DASHBOARD_SOURCE_URL", "APP__SOURCE_URL"] {
        if let Some(v) = lookup(key) {
            settings.source_url = v;
        }
    }

    for key in ["HR_DASHBOARD_FETCH_LIMIT", "APP__FETCH_LIMIT"] {
        if let Some(v) = lookup(key) {
            settings.fetch_limit = parse_value("fetch_limit", &v)?;
        }
    }

    for key in ["HR_DASHBOARD_SEED", "APP__RNG_SEED"] {
        if let Some(v) = lookup(key) {
            settings.rng_seed = Some(parse_value("rng_seed", &v)?);
        }
    }

    for key in ["RUST_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = lookup(key) {
            settings.log_filter = v;
        }
    }

    Ok(())
}

pub(crate) fn validate(settings: &Settings) -> Result<(), ConfigError> {
    Url::parse(&settings.source_url).map_err(|source| ConfigError::InvalidUrl {
        url: settings.source_url.clone(),
        source,
    })?;
    if settings.fetch_limit == 0 {
        return Err(ConfigError::InvalidValue {
            key: "fetch_limit",
            value: settings.fetch_limit.to_string(),
        });
    }
    Ok(())
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "regform.toml";

/// Errors raised while loading `regform.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// How validation results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Pin the calendar year instead of reading the wall clock.
    pub year: Option<i32>,
    pub format: OutputFormat,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing` filter directive, overridden by `REGFORM_LOG`.
    pub level: String,
    /// Emit JSON lines instead of human-readable logs.
    pub json: bool,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
            file: None,
        }
    }
}

/// Load the config from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_config(path: Option<&Path>) -> ConfigResult<CliConfig> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !explicit && !path.exists() {
        return Ok(CliConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> ConfigResult<CliConfig> {
    Ok(toml::from_str(contents)?)
}

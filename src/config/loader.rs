//! Configuration loader for pound-check
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map, Source, Value};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for a specific configuration file
const CONFIG_FILE_ENV: &str = "POUNDCHECK_CONFIG_FILE";

/// Configuration file picked up from the working directory when present
const DEFAULT_CONFIG_FILE: &str = "pound-check.toml";

/// Environment variable for a specific `.env` file
const DOTENV_FILE_ENV: &str = "POUNDCHECK_DOTENV";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "POUNDCHECK";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Flat variable names understood for compatibility with existing deployments,
/// with the configuration key each one feeds.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("PARIS_POUND_URL", "pound.url"),
    ("VEHICLE_PLATE_NUMBER", "pound.vehicle_plate"),
    ("NO_ALERT_STRING", "pound.no_alert_marker"),
    ("SLACK_TOKEN", "notifier.slack.token"),
    ("SLACK_CHANNEL", "notifier.slack.channel"),
];

/// Outcome of looking for a `.env` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    /// Variables were read from this file
    Loaded(PathBuf),
    /// No `.env` file was found, process environment is used as is
    NotFound,
}

/// Load a `.env` file into the process environment
///
/// Uses `POUNDCHECK_DOTENV` when set (the file must then exist), otherwise
/// looks for `.env` in the working directory and its parents. Variables
/// already present in the environment are never overwritten.
pub fn load_dotenv() -> Result<DotenvStatus, ConfigError> {
    if let Ok(path) = std::env::var(DOTENV_FILE_ENV) {
        let path = PathBuf::from(path);
        dotenvy::from_path(&path).map_err(|e| {
            ConfigError::file_not_found(format!("{} ({})", path.display(), e))
        })?;
        return Ok(DotenvStatus::Loaded(path));
    }

    match dotenvy::dotenv() {
        Ok(path) => Ok(DotenvStatus::Loaded(path)),
        Err(e) if e.not_found() => Ok(DotenvStatus::NotFound),
        Err(e) => Err(ConfigError::ParseError(format!("Invalid .env file: {}", e))),
    }
}

/// Configuration loader that handles layered configuration loading
///
/// Sources, in order of priority (lowest first):
/// 1. Built-in defaults
/// 2. TOML configuration file (optional)
/// 3. Legacy flat variables (`PARIS_POUND_URL`, `SLACK_TOKEN`, ...)
/// 4. `POUNDCHECK_<SECTION>__<KEY>` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration file path, if any
    config_file: Option<PathBuf>,
    /// Whether a missing configuration file is an error
    required: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// An explicit path (from `--config`) wins over `POUNDCHECK_CONFIG_FILE`;
    /// both make the file required. Without either, `pound-check.toml` in the
    /// working directory is used when it exists.
    pub fn new(explicit_file: Option<&Path>) -> Self {
        if let Some(path) = explicit_file {
            return Self {
                config_file: Some(path.to_path_buf()),
                required: true,
            };
        }

        match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self {
                config_file: Some(PathBuf::from(path)),
                required: true,
            },
            _ => Self {
                config_file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
                required: false,
            },
        }
    }

    /// Get the configuration file path
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// The result is not validated: CLI overrides are merged afterwards and
    /// the merged settings are validated once.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or a source cannot be
    /// parsed into `Settings`.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(ref path) = self.config_file {
            builder = self.add_file_source(builder, path)?;
        }

        let builder = builder
            .add_source(LegacyEnvironment::from_process()?)
            .add_source(Self::env_source());

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if self.required && !path.is_file() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let name = path.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!("Non UTF-8 configuration path: {}", path.display()))
        })?;

        Ok(builder.add_source(File::new(name, FileFormat::Toml).required(self.required)))
    }

    /// Environment variable source for nested keys
    ///
    /// Only variables carrying the `__` separator are considered, so flat
    /// variables such as `POUNDCHECK_NOTIFIER` or `POUNDCHECK_CONFIG_FILE` do
    /// not leak into the settings tree.
    ///
    /// Examples:
    /// - `POUNDCHECK_POUND__URL` -> `pound.url`
    /// - `POUNDCHECK_NOTIFIER__SLACK__CHANNEL` -> `notifier.slack.channel`
    fn env_source() -> Environment {
        let prefix = format!("{}_", ENV_PREFIX);
        let nested: Map<String, String> = std::env::vars()
            .filter(|(key, _)| {
                key.strip_prefix(&prefix)
                    .is_some_and(|rest| rest.contains(ENV_SEPARATOR))
            })
            .collect();

        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .ignore_empty(true)
            .source(Some(nested))
    }
}

/// Source mapping the legacy flat variable names onto configuration keys
///
/// `POUNDCHECK_<NAME>` is accepted as well and wins over the bare name.
#[derive(Debug, Clone, Default)]
struct LegacyEnvironment {
    values: Vec<(String, String)>,
}

impl LegacyEnvironment {
    fn from_process() -> Result<Self, ConfigError> {
        let mut values = Vec::new();

        for (name, key) in LEGACY_ENV_KEYS {
            let prefixed = format!("{}_{}", ENV_PREFIX, name);
            if let Some(value) = Self::read(&prefixed)?.or(Self::read(name)?) {
                values.push((key.to_string(), value));
            }
        }

        Ok(Self { values })
    }

    fn read(name: &str) -> Result<Option<String>, ConfigError> {
        match std::env::var(name) {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::EnvVarError(format!(
                "{} is not valid unicode",
                name
            ))),
        }
    }
}

impl Source for LegacyEnvironment {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let origin = "legacy environment".to_string();
        Ok(self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), Value::new(Some(&origin), value.clone())))
            .collect())
    }
}

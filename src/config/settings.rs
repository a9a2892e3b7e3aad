//! Configuration settings structures for pound-check
//!
//! This module defines all configuration structures that can be loaded from
//! a TOML file, a `.env` file and environment variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_timeout() -> u64 {
    20
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_notifier() -> String {
    "none".to_string()
}

fn default_slack_api_url() -> String {
    "https://slack.com/api/chat.postMessage".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs/pound-check.log".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Pound lookup
// ============================================================================

/// Impound lookup site settings
///
/// All three values are required; an empty value fails validation before
/// any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PoundSettings {
    /// Base URL of the lookup page, without query string
    #[serde(default)]
    pub url: String,

    /// Plate number of the watched vehicle
    #[serde(default)]
    pub vehicle_plate: String,

    /// Text present on the result page when the vehicle is not impounded
    #[serde(default)]
    pub no_alert_marker: String,
}

// ============================================================================
// HTTP client
// ============================================================================

/// Outbound HTTP settings shared by the lookup and the notifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Total request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

// ============================================================================
// Notifiers
// ============================================================================

/// Slack credentials and endpoint
///
/// Token and channel stay optional here: they are only checked when the
/// Slack notifier actually sends something.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackSettings {
    /// Bot token sent as `Authorization: Bearer`
    #[serde(default)]
    pub token: Option<String>,

    /// Channel id or name the alert is posted to
    #[serde(default)]
    pub channel: Option<String>,

    /// chat.postMessage endpoint
    #[serde(default = "default_slack_api_url")]
    pub api_url: String,
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            token: None,
            channel: None,
            api_url: default_slack_api_url(),
        }
    }
}

/// Notifier selection and per-notifier credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierSettings {
    /// Notifier used when none is given on the command line
    #[serde(default = "default_notifier")]
    pub default: String,

    /// Slack notifier settings
    #[serde(default)]
    pub slack: SlackSettings,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            default: default_notifier(),
            slack: SlackSettings::default(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// File output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Whether file output is enabled
    #[serde(default)]
    pub enabled: bool,

    /// Path to the log file
    #[serde(default = "default_log_path")]
    pub path: String,

    /// Whether to append to existing file
    #[serde(default = "default_true")]
    pub append: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
            append: default_true(),
            format: default_log_format(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,

    /// File output settings
    #[serde(default)]
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);
        let format = self
            .file
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: e.to_string(),
            })?;
        let file = FileConfig {
            enabled: self.file.enabled,
            path: PathBuf::from(self.file.path),
            append: self.file.append,
            format,
        };

        LoggerConfig::new(console, file, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Lookup site and watched vehicle
    #[serde(default)]
    pub pound: PoundSettings,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpSettings,

    /// Notifier configuration
    #[serde(default)]
    pub notifier: NotifierSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

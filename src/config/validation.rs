//! Configuration validation logic
//!
//! This module provides validation methods for the configuration structures
//! that are checked eagerly at startup. Notifier credentials are checked by
//! the selected notifier when it sends.

use crate::config::check::CheckConfig;
use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, HttpSettings, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Upper bound for any outbound request timeout
const MAX_TIMEOUT_SECONDS: u64 = 120;

impl HttpSettings {
    /// Validate HTTP settings
    ///
    /// # Validation Rules
    /// - Timeout must be between 1 and 120 seconds
    /// - Connect timeout must be greater than 0 and not exceed the timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ConfigError::ValidationError {
                field: "http.timeout_seconds".to_string(),
                message: format!(
                    "Timeout must be between 1 and {} seconds, got {}.",
                    MAX_TIMEOUT_SECONDS, self.timeout_seconds
                ),
            });
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_seconds",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_seconds > self.timeout_seconds {
            return Err(ConfigError::ValidationError {
                field: "http.connect_timeout_seconds".to_string(),
                message: format!(
                    "Connect timeout ({}) cannot exceed the request timeout ({}).",
                    self.connect_timeout_seconds, self.timeout_seconds
                ),
            });
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all eagerly-checked settings
    ///
    /// Returns the first validation error encountered. The pound section is
    /// checked first so a missing lookup value is always the reported cause.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_config()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }

    /// Immutable check configuration derived from the pound section
    pub fn check_config(&self) -> Result<CheckConfig, ConfigError> {
        CheckConfig::try_from(&self.pound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.pound.url = "https://pound.example.org/search".to_string();
        settings.pound.vehicle_plate = "AB-123-CD".to_string();
        settings.pound.no_alert_marker = "RAS".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_missing_pound_value_fails_first() {
        let mut settings = valid_settings();
        settings.pound.no_alert_marker.clear();
        settings.logger.level = "loud".to_string();

        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { ref field, .. } if field == "pound.no_alert_marker"
        ));
    }

    #[test]
    fn test_slack_credentials_not_required_at_startup() {
        let settings = valid_settings();
        assert!(settings.notifier.slack.token.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_connect_timeout_cannot_exceed_timeout() {
        let mut settings = valid_settings();
        settings.http.timeout_seconds = 5;
        settings.http.connect_timeout_seconds = 6;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_requires_an_output() {
        let mut settings = valid_settings();
        settings.logger.console.enabled = false;
        assert!(settings.validate().is_err());

        settings.logger.file.enabled = true;
        assert!(settings.validate().is_ok());
    }

    proptest! {
        #[test]
        fn property_timeouts_in_range_are_valid(timeout in 1u64..=120, connect in 1u64..=120) {
            let http = HttpSettings {
                timeout_seconds: timeout,
                connect_timeout_seconds: connect.min(timeout),
            };
            prop_assert!(http.validate().is_ok());
        }

        #[test]
        fn property_timeouts_out_of_range_are_rejected(timeout in 121u64..10_000) {
            let http = HttpSettings {
                timeout_seconds: timeout,
                connect_timeout_seconds: 1,
            };
            prop_assert!(http.validate().is_err());
        }
    }
}

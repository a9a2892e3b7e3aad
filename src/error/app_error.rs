use crate::config::error::ConfigError;
use thiserror::Error;

/// Exit code for a run that completed, whatever the vehicle status.
pub const EXIT_OK: i32 = 0;

/// Exit code for a run that failed while talking to the outside world.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a run rejected before any check was attempted.
pub const EXIT_USAGE: i32 = 2;

/// Application-wide error type covering every way a single run can fail.
///
/// Every variant is fatal for the run: there is no retry layer, the binary
/// is expected to be re-invoked by an external scheduler.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Unknown notifier name requested on the command line or in the config
    #[error("Invalid notifier '{name}', supported values are: {supported}")]
    InvalidNotifier { name: String, supported: String },

    /// Transport failure or non-success HTTP status
    #[error("Network error during {operation} ({url})")]
    Network {
        operation: String,
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// Response body could not be read to the end
    #[error("Failed to read response body from {url}")]
    BodyRead {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    /// The notification channel refused or failed to deliver the alert
    #[error("Notification via {provider} failed: {reason}")]
    Notify { provider: String, reason: String },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Builds a configuration error from a plain message.
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Configuration {
            key: key.into(),
            source: anyhow::anyhow!(message.into()),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Configuration { .. } | AppError::InvalidNotifier { .. } => EXIT_USAGE,
            AppError::Network { .. }
            | AppError::BodyRead { .. }
            | AppError::Notify { .. }
            | AppError::Internal { .. } => EXIT_FAILURE,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        AppError::Configuration {
            key: error.key().to_string(),
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_with_two() {
        let err = AppError::InvalidNotifier {
            name: "unknown".to_string(),
            supported: "none, slack".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_USAGE);
        assert_eq!(
            AppError::configuration("notifier.slack.token", "missing").exit_code(),
            EXIT_USAGE
        );
    }

    #[test]
    fn test_runtime_errors_exit_with_one() {
        let err = AppError::Notify {
            provider: "slack".to_string(),
            reason: "invalid_auth".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_FAILURE);

        let err = AppError::Network {
            operation: "pound lookup".to_string(),
            url: "https://example.org".to_string(),
            source: anyhow::anyhow!("connection refused"),
        };
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_config_error_keeps_field_as_key() {
        let err: AppError = ConfigError::validation("pound.url", "Pound URL is required.").into();
        match err {
            AppError::Configuration { key, source } => {
                assert_eq!(key, "pound.url");
                assert!(source.to_string().contains("Pound URL is required."));
            }
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }
}

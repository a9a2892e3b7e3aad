//! Errors raised while assembling the run settings

use thiserror::Error;

/// Why the settings could not be loaded or accepted
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested file (`--config`, `POUNDCHECK_CONFIG_FILE`,
    /// `POUNDCHECK_DOTENV`) does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A source exists but cannot be turned into settings
    #[error("Cannot parse settings: {0}")]
    ParseError(String),

    /// A value is missing or out of range
    #[error("Invalid {field}: {message}")]
    ValidationError {
        /// Dotted settings key, e.g. `pound.url`
        field: String,
        message: String,
    },

    /// An environment variable holds non-unicode data
    #[error("Unreadable environment variable: {0}")]
    EnvVarError(String),

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    /// Settings key the error is about, used to label the run failure
    pub fn key(&self) -> &str {
        match self {
            ConfigError::ValidationError { field, .. } => field,
            ConfigError::FileNotFound(_) => "config_file",
            ConfigError::EnvVarError(_) => "environment",
            ConfigError::ParseError(_) | ConfigError::Other(_) => "settings",
        }
    }
}

//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Largest accepted `--timeout`, matching the `[http]` bounds
const MAX_TIMEOUT_SECONDS: u64 = 120;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate a request timeout in seconds (1-120)
pub fn validate_timeout(timeout_str: &str) -> Result<u64, String> {
    let seconds: u64 = timeout_str.trim().parse().map_err(|_| {
        format!(
            "Timeout must be a number of seconds between 1 and {}, got: '{}'",
            MAX_TIMEOUT_SECONDS, timeout_str
        )
    })?;

    if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
        return Err(format!(
            "Timeout must be between 1 and {} seconds, got {}",
            MAX_TIMEOUT_SECONDS, seconds
        ));
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_timeout_validation_valid() {
        for timeout in ["1", "20", "120", " 30 "] {
            assert!(validate_timeout(timeout).is_ok(), "Timeout {} should be valid", timeout);
        }
    }

    #[test]
    fn test_timeout_validation_invalid() {
        for timeout in ["0", "121", "-1", "abc", ""] {
            assert!(validate_timeout(timeout).is_err(), "Timeout '{}' should be invalid", timeout);
        }
    }

    #[test]
    fn test_config_file_path_validation() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_config_file_path("/nonexistent/pound-check.toml").is_err());
    }
}

//! Immutable inputs of a single impound check

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::PoundSettings;

/// Validated lookup configuration, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    lookup_base_url: Url,
    vehicle_identifier: String,
    no_alert_marker: String,
}

impl CheckConfig {
    /// Builds a check configuration, rejecting empty values and non-http URLs.
    pub fn new(
        lookup_base_url: &str,
        vehicle_identifier: &str,
        no_alert_marker: &str,
    ) -> Result<Self, ConfigError> {
        let lookup_base_url = lookup_base_url.trim();
        if lookup_base_url.is_empty() {
            return Err(ConfigError::validation(
                "pound.url",
                "Pound lookup URL is required (PARIS_POUND_URL).",
            ));
        }
        if vehicle_identifier.trim().is_empty() {
            return Err(ConfigError::validation(
                "pound.vehicle_plate",
                "Vehicle plate number is required (VEHICLE_PLATE_NUMBER).",
            ));
        }
        if no_alert_marker.trim().is_empty() {
            return Err(ConfigError::validation(
                "pound.no_alert_marker",
                "No-alert marker is required (NO_ALERT_STRING).",
            ));
        }

        let url = Url::parse(lookup_base_url).map_err(|e| ConfigError::ValidationError {
            field: "pound.url".to_string(),
            message: format!("Invalid pound lookup URL '{}': {}", lookup_base_url, e),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::validation(
                "pound.url",
                "Pound lookup URL must use http or https protocol.",
            ));
        }

        Ok(Self {
            lookup_base_url: url,
            vehicle_identifier: vehicle_identifier.trim().to_string(),
            no_alert_marker: no_alert_marker.to_string(),
        })
    }

    pub fn lookup_base_url(&self) -> &Url {
        &self.lookup_base_url
    }

    pub fn vehicle_identifier(&self) -> &str {
        &self.vehicle_identifier
    }

    pub fn no_alert_marker(&self) -> &str {
        &self.no_alert_marker
    }
}

impl TryFrom<&PoundSettings> for CheckConfig {
    type Error = ConfigError;

    fn try_from(settings: &PoundSettings) -> Result<Self, Self::Error> {
        CheckConfig::new(
            &settings.url,
            &settings.vehicle_plate,
            &settings.no_alert_marker,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_check_config() {
        let config = CheckConfig::new("https://pound.example.org/search", "AB-123-CD", "RAS")
            .unwrap();
        assert_eq!(config.vehicle_identifier(), "AB-123-CD");
        assert_eq!(config.no_alert_marker(), "RAS");
        assert_eq!(config.lookup_base_url().host_str(), Some("pound.example.org"));
    }

    #[test]
    fn test_each_missing_value_is_reported() {
        let err = CheckConfig::new("", "AB-123-CD", "RAS").unwrap_err();
        assert_eq!(field_of(err), "pound.url");

        let err = CheckConfig::new("https://pound.example.org", "  ", "RAS").unwrap_err();
        assert_eq!(field_of(err), "pound.vehicle_plate");

        let err = CheckConfig::new("https://pound.example.org", "AB-123-CD", "").unwrap_err();
        assert_eq!(field_of(err), "pound.no_alert_marker");

        let err = CheckConfig::new("https://pound.example.org", "AB-123-CD", "   ").unwrap_err();
        assert_eq!(field_of(err), "pound.no_alert_marker");
    }

    #[test]
    fn test_marker_keeps_surrounding_spaces() {
        let config = CheckConfig::new("https://pound.example.org", "AB-123-CD", " RAS ").unwrap();
        assert_eq!(config.no_alert_marker(), " RAS ");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(CheckConfig::new("not a url", "AB-123-CD", "RAS").is_err());
        assert!(CheckConfig::new("ftp://pound.example.org", "AB-123-CD", "RAS").is_err());
    }

    #[test]
    fn test_from_pound_settings() {
        let settings = PoundSettings {
            url: "http://pound.example.org/recherche".to_string(),
            vehicle_plate: "1234".to_string(),
            no_alert_marker: "Aucun".to_string(),
        };
        let config = CheckConfig::try_from(&settings).unwrap();
        assert_eq!(config.vehicle_identifier(), "1234");
    }
}

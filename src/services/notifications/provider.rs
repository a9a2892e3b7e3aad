//! Core notification provider trait and types.
//!
//! This module provides the abstraction for notification providers,
//! allowing easy extension to support different notification channels.

use crate::error::AppResult;
use async_trait::async_trait;

/// What an alert is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContext {
    /// Lookup page showing the impound details
    pub details_url: String,
    /// Plate number of the vehicle
    pub vehicle_identifier: String,
    /// Sent by the `test` command rather than a real detection
    pub is_test: bool,
}

impl NotificationContext {
    /// Context for a real impound detection
    pub fn alert(details_url: impl Into<String>, vehicle_identifier: impl Into<String>) -> Self {
        Self {
            details_url: details_url.into(),
            vehicle_identifier: vehicle_identifier.into(),
            is_test: false,
        }
    }

    /// Context for a delivery test
    pub fn test(details_url: impl Into<String>, vehicle_identifier: impl Into<String>) -> Self {
        Self {
            is_test: true,
            ..Self::alert(details_url, vehicle_identifier)
        }
    }
}

/// Message to be delivered by a provider, built at notify time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    /// Rendered alert text
    pub body_text: String,
    /// Channel, room or recipient the message is addressed to
    pub target: String,
}

/// Result of a notify call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The channel accepted the message
    Delivered {
        /// HTTP status code returned by the channel
        status_code: u16,
        /// Time taken for the operation in milliseconds
        duration_ms: u64,
    },
    /// Nothing was sent (no notifier configured)
    Skipped,
}

/// Trait for notification channels
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct SmsNotifier {
///     settings: SmsSettings,
/// }
///
/// #[async_trait]
/// impl NotificationProvider for SmsNotifier {
///     async fn notify(&self, context: &NotificationContext) -> AppResult<NotifyOutcome> {
///         // Implementation here
///     }
///
///     fn name(&self) -> &'static str {
///         "sms"
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Delivers an alert for `context`
    ///
    /// # Errors
    /// - `AppError::Configuration` when credentials are missing
    /// - `AppError::Network` when the channel cannot be reached
    /// - `AppError::Notify` when the channel refuses the message
    async fn notify(&self, context: &NotificationContext) -> AppResult<NotifyOutcome>;

    /// Returns the provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Validates provider configuration (optional, default no-op)
    ///
    /// Called right before sending, never at startup.
    fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}

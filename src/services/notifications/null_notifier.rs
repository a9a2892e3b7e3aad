//! Notifier used when no channel is selected.

use super::provider::{NotificationContext, NotificationProvider, NotifyOutcome};
use crate::error::AppResult;
use async_trait::async_trait;

/// Sends nothing and reports `NotifyOutcome::Skipped`
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

#[async_trait]
impl NotificationProvider for NullNotifier {
    async fn notify(&self, context: &NotificationContext) -> AppResult<NotifyOutcome> {
        tracing::warn!(
            vehicle = %context.vehicle_identifier,
            "No notifier configured, alert not sent (use --notifier slack)"
        );
        Ok(NotifyOutcome::Skipped)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

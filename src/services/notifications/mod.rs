//! Notification system
//!
//! Alerts go through a `NotificationProvider` chosen by name at startup:
//! - `none`: logs a warning and sends nothing
//! - `slack`: posts to a Slack channel

mod null_notifier;
mod provider;
mod registry;
mod slack_notifier;

pub use null_notifier::NullNotifier;
pub use provider::{NotificationContext, NotificationMessage, NotificationProvider, NotifyOutcome};
pub use registry::NotifierKind;
pub use slack_notifier::SlackNotifier;

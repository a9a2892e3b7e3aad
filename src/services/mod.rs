//! Service layer: impound lookup, alert delivery and the run that ties them together.

pub mod notifications;
pub mod runner;
pub mod status_checker;

pub use runner::{RunMode, RunOutcome, Runner};
pub use status_checker::{CheckResult, StatusChecker};

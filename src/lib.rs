//! pound-check library
//!
//! Core modules of the pound-check command-line tool.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

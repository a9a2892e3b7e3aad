//! Plain file writer for the logger

use crate::logger::config::FileConfig;
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;

/// Opens the log file described by `config`, creating its parent directory.
///
/// The returned mutex is used directly as a `MakeWriter` by the fmt layer.
pub fn open_log_file(config: &FileConfig) -> anyhow::Result<Mutex<File>> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)
        .with_context(|| format!("Cannot open log file {}", config.path.display()))?;

    Ok(Mutex::new(file))
}

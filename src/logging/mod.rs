//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so when enabled the `tracing` subscriber
//! writes plain text lines to the configured file instead of stdout. When
//! disabled no subscriber is installed and every `tracing` macro is a no-op.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level: LevelFilter = config
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let path = expand_home(&config.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();

    tracing::info!(file = %path.display(), %level, "logging started");
    Ok(())
}

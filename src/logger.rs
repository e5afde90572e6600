//! Logging setup on top of the `log` facade.
//!
//! Lines go to stderr and, when configured, to an append-only file. Nothing is
//! installed unless logging is enabled.

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;

/// Build the dispatcher described by the configuration without installing it.
pub fn dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Utc::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(path) = &config.file {
        let file =
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. Returns whether a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    dispatch(config)?.apply().context("A global logger is already installed")?;
    Ok(true)
}

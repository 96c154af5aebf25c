//! Subscriber setup for evaluation runs
//!
//! Evaluator and resolver events go to stdout as text or JSON lines, and
//! optionally to a daily-rotated file. `LAKEGUARD_LOG` takes any `tracing`
//! filter directive, e.g. `lakeguard_validate=debug` for per-entity verdicts.

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_FILE_PREFIX, LOG_FILTER_ENV};
use lakeguard_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// Fails on an unknown level, or when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_PREFIX)),
        )
    });

    // Layer types differ between plain and JSON, hence separate branches
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_names(true);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    } else {
        let stdout = fmt::layer().with_target(true).with_thread_names(true);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).try_init()
        } else {
            registry.with(stdout).try_init()
        }
    };

    initialized.map_err(|e| Error::Configuration {
        message: format!("Failed to initialize logging: {e}"),
        source: Some(Box::new(e)),
    })?;

    info!(%level, json = config.json_format, file = ?config.file_output, "Logging initialized");
    Ok(())
}

/// `trace`..`error` in any case; `warning` is accepted for `warn`
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!("Invalid log level: {level}. Use trace, debug, info, warn, or error"),
            source: None,
        }),
    }
}

/// Report which configuration file was read, or that it was missing
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!(path = %config_path.display(), "Configuration file loaded");
    } else {
        warn!(path = %config_path.display(), "Configuration file not found, using defaults");
    }
}

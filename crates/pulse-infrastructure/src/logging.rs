//! Structured logging with tracing
//!
//! Centralized logging configuration for the workspace. Configures the
//! tracing subscriber with a level filter, optional JSON output, and
//! optional daily-rotating file output.

use pulse_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;

/// Initialize logging with the provided configuration.
///
/// The `PULSE_LOG` environment variable overrides the configured level
/// filter when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| std::path::Path::new(".")),
            path.file_stem()
                .unwrap_or_else(|| std::ffi::OsStr::new("pulse")),
        )
    });

    // json_format switches the layer type, so the branches cannot share a
    // single builder chain
    if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).init();
        } else {
            registry.with(stdout).init();
        }
    } else {
        let stdout = fmt::layer().with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(stdout).with(file).init();
        } else {
            registry.with(stdout).init();
        }
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse a log level string into a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

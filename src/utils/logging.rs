//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging helpers
//! for catalog loading and string resolution.

use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{PhrasebookError, Result, TemplateError};

/// Initialize logging based on configuration
///
/// Console output goes to stderr. When a log directory is configured, a daily
/// rolling file is written as well; the returned guard must be kept alive for
/// the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PhrasebookError::Logging(format!("Invalid log level '{}': {}", config.level, e)))?;

    let console_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PhrasebookError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a bundle assigned to a locale
pub fn log_bundle_loaded(locale: &str, path: &Path, key_count: usize, cached: bool) {
    info!(
        locale = locale,
        path = %path.display(),
        key_count = key_count,
        cached = cached,
        "Bundle loaded"
    );
}

/// Log a bundle that could not be loaded
pub fn log_bundle_failed(locale: &str, path: &Path, error: &PhrasebookError) {
    error!(
        locale = locale,
        path = %path.display(),
        error = %error,
        "Failed to load bundle"
    );
}

/// Log a lookup redirected to the default locale
pub fn log_fallback(locale: &str, default_locale: &str, key: &str, reason: &str) {
    debug!(
        locale = locale,
        default_locale = default_locale,
        key = key,
        reason = reason,
        "Falling back to default locale"
    );
}

/// Log a lookup that could not be resolved and returned its key
pub fn log_unresolved(locale: &str, key: &str, reason: &str) {
    warn!(
        locale = locale,
        key = key,
        reason = reason,
        "Translation not found, key returned"
    );
}

/// Log a template that failed to parse or render
pub fn log_template_error(locale: &str, key: &str, stage: &str, error: &TemplateError) {
    warn!(
        locale = locale,
        key = key,
        stage = stage,
        error = %error,
        "Template substitution failed, raw text returned"
    );
}

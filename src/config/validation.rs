//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;
use crate::utils::errors::{PhrasebookError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(PhrasebookError::Config(
            "Default locale is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for source in &config.bundles {
        if source.locale.is_empty() {
            return Err(PhrasebookError::Config(
                format!("Bundle locale is required for path '{}'", source.path)
            ));
        }

        if source.path.is_empty() {
            return Err(PhrasebookError::Config(
                format!("Bundle path is required for locale '{}'", source.locale)
            ));
        }

        if !seen.insert(source.locale.as_str()) {
            return Err(PhrasebookError::Config(
                format!("Locale '{}' is declared more than once", source.locale)
            ));
        }
    }

    if !config.bundles.is_empty() && !seen.contains(config.default_locale.as_str()) {
        return Err(PhrasebookError::Config(
            "Default locale must have a bundle".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PhrasebookError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PhrasebookError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_prefix.is_empty() {
        return Err(PhrasebookError::Config(
            "Log file prefix is required when a log directory is set".to_string()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BundleSource, I18nConfig, LoggingConfig};
    use assert_matches::assert_matches;

    fn source(locale: &str, path: &str) -> BundleSource {
        BundleSource {
            locale: locale.to_string(),
            path: path.to_string(),
        }
    }

    fn settings_with(bundles: Vec<BundleSource>) -> Settings {
        Settings {
            i18n: I18nConfig {
                default_locale: "en-US".to_string(),
                bundles,
            },
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_shared_path_is_valid() {
        let settings = settings_with(vec![
            source("en-US", "locales/en.json"),
            source("en-GB", "locales/en.json"),
        ]);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_default_locale() {
        let mut settings = Settings::default();
        settings.i18n.default_locale.clear();
        assert_matches!(validate_settings(&settings), Err(PhrasebookError::Config(_)));
    }

    #[test]
    fn test_duplicate_locale() {
        let settings = settings_with(vec![
            source("en-US", "locales/en.json"),
            source("en-US", "locales/other.json"),
        ]);
        assert_matches!(validate_settings(&settings), Err(PhrasebookError::Config(msg)) if msg.contains("more than once"));
    }

    #[test]
    fn test_default_locale_without_bundle() {
        let settings = settings_with(vec![source("ru", "locales/ru.json")]);
        assert_matches!(validate_settings(&settings), Err(PhrasebookError::Config(_)));
    }

    #[test]
    fn test_empty_bundle_path() {
        let settings = settings_with(vec![source("en-US", "")]);
        assert_matches!(validate_settings(&settings), Err(PhrasebookError::Config(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(PhrasebookError::Config(_)));
    }

    #[test]
    fn test_log_directory_requires_prefix() {
        let mut settings = Settings::default();
        settings.logging.directory = Some("logs".to_string());
        settings.logging.file_prefix.clear();
        assert_matches!(validate_settings(&settings), Err(PhrasebookError::Config(_)));
    }
}

//! Error handling for Phrasebook
//!
//! This module defines the error types used throughout the crate. Loading
//! errors are surfaced to the caller; template errors stay internal to the
//! resolver and are absorbed into a degraded output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Phrasebook
#[derive(Error, Debug)]
pub enum PhrasebookError {
    #[error("Failed to read bundle '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse bundle '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings loading error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Template parse and execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unclosed action starting at byte {0}")]
    UnclosedAction(usize),

    #[error("missing value for action at byte {0}")]
    EmptyAction(usize),

    #[error("unsupported action '{0}'")]
    UnsupportedAction(String),

    #[error("map has no entry for key \"{0}\"")]
    MissingVariable(String),

    #[error("can't evaluate field {field} in non-object value \"{path}\"")]
    NotAnObject { path: String, field: String },
}

/// Result type alias for Phrasebook operations
pub type Result<T> = std::result::Result<T, PhrasebookError>;

/// Result type alias for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

impl PhrasebookError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PhrasebookError::Io { .. } => true,
            PhrasebookError::Parse { .. } => false,
            PhrasebookError::Config(_) => false,
            PhrasebookError::Settings(_) => false,
            PhrasebookError::Logging(_) => true,
            PhrasebookError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PhrasebookError::Config(_) => ErrorSeverity::Critical,
            PhrasebookError::Settings(_) => ErrorSeverity::Critical,
            PhrasebookError::Logging(_) => ErrorSeverity::Warning,
            PhrasebookError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_recoverable() {
        let err = PhrasebookError::Io {
            path: PathBuf::from("locales/en.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.to_string(), "Failed to read bundle 'locales/en.json': missing");
    }

    #[test]
    fn test_parse_error_is_not_recoverable() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PhrasebookError::Parse {
            path: PathBuf::from("broken.json"),
            source,
        };

        assert!(!err.is_recoverable());
        assert!(err.to_string().starts_with("Failed to parse bundle 'broken.json'"));
    }

    #[test]
    fn test_config_error_is_critical() {
        let err = PhrasebookError::Config("Default locale is required".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }

    #[test]
    fn test_template_error_messages() {
        assert_eq!(
            TemplateError::MissingVariable("name".to_string()).to_string(),
            "map has no entry for key \"name\""
        );
        assert_eq!(
            TemplateError::UnclosedAction(7).to_string(),
            "unclosed action starting at byte 7"
        );
    }
}

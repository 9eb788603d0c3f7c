//! Phrasebook
//!
//! Locale-aware text resolution for chat bots and other hosts that need
//! localized strings. Translations are loaded from JSON files into a
//! [`Catalog`], nested keys are flattened to dotted paths, and lookups fall
//! back to a default locale or to the key itself.

pub mod config;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PhrasebookError, Result};
pub use i18n::{Bundle, Catalog, Locale, TranslationParams};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

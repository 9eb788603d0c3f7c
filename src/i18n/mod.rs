//! Internationalization module
//!
//! Locale-aware text resolution: JSON bundles are flattened into dotted keys
//! with one or more variants per key, stored per locale in a [`Catalog`], and
//! resolved with a single fallback hop to the default locale and strict
//! `{{ }}` template substitution.

pub mod bundle;
pub mod catalog;
pub mod flatten;
pub mod resolver;
pub mod template;

// Re-export commonly used i18n components
pub use bundle::{Bundle, Locale, TranslationParams, DEFAULT_LOCALE};
pub use catalog::{Catalog, LocaleStats, TranslationStats};
pub use flatten::{flatten, Node};
pub use template::Template;

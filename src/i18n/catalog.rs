//! Translation catalog
//!
//! Owns the bundles of every loaded locale, the default locale used for
//! fallback, and a cache of parsed source files so that one file can back
//! several locales without being read twice.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde_json::{Map, Value};
use tracing::debug;
use super::bundle::{Bundle, Locale};
use super::flatten::flatten;
use crate::config::I18nConfig;
use crate::utils::errors::{PhrasebookError, Result};
use crate::utils::logging;

/// Locale-aware translation catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(super) default_locale: Locale,
    pub(super) translations: HashMap<Locale, Bundle>,
    loaded_sources: HashMap<PathBuf, Bundle>,
}

impl Catalog {
    /// Create an empty catalog with the default locale set to [`DEFAULT_LOCALE`](super::DEFAULT_LOCALE)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from configuration
    ///
    /// A bundle that fails to load for the default locale aborts; failures for
    /// other locales are logged and skipped.
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.set_default(config.default_locale.as_str());

        for source in &config.bundles {
            if let Err(e) = catalog.load_bundle(source.locale.as_str(), &source.path) {
                if source.locale == config.default_locale {
                    return Err(e);
                }
            }
        }

        Ok(catalog)
    }

    /// Set the locale used as a fallback
    pub fn set_default(&mut self, locale: impl Into<Locale>) {
        self.default_locale = locale.into();
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Load a translation file for a locale
    ///
    /// A path that was already parsed, for this or another locale, is served
    /// from the cache without touching the filesystem. Loading a locale again
    /// replaces its bundle.
    pub fn load_bundle(&mut self, locale: impl Into<Locale>, path: impl AsRef<Path>) -> Result<()> {
        let locale = locale.into();
        let path = path.as_ref();

        if let Some(cached) = self.loaded_sources.get(path) {
            logging::log_bundle_loaded(locale.as_str(), path, cached.len(), true);
            self.translations.insert(locale, cached.clone());
            return Ok(());
        }

        let bundle = match read_bundle(path) {
            Ok(bundle) => bundle,
            Err(e) => {
                logging::log_bundle_failed(locale.as_str(), path, &e);
                return Err(e);
            }
        };

        logging::log_bundle_loaded(locale.as_str(), path, bundle.len(), false);
        self.loaded_sources.insert(path.to_path_buf(), bundle.clone());
        self.translations.insert(locale, bundle);
        Ok(())
    }

    /// Insert or replace the variants of one key in a locale
    ///
    /// The locale's bundle is created if it was never loaded. Empty `variants`
    /// remove the key. Other locales and the source cache are left untouched.
    pub fn upsert<I, S>(&mut self, locale: impl Into<Locale>, key: impl Into<String>, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locale = locale.into();
        let key = key.into();
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();

        debug!(locale = %locale, key = %key, variants = variants.len(), "Upserting translation key");
        self.translations
            .entry(locale)
            .or_default()
            .insert(key, variants);
    }

    /// Bundle assigned to a locale
    pub fn bundle(&self, locale: &str) -> Option<&Bundle> {
        self.translations.get(locale)
    }

    pub fn is_loaded(&self, locale: &str) -> bool {
        self.translations.contains_key(locale)
    }

    /// Loaded locales in sorted order
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.translations.keys().collect();
        locales.sort();
        locales
    }

    /// Whether a source path has already been parsed
    pub fn is_source_cached(&self, path: impl AsRef<Path>) -> bool {
        self.loaded_sources.contains_key(path.as_ref())
    }

    pub fn loaded_source_count(&self) -> usize {
        self.loaded_sources.len()
    }

    /// Get translation statistics
    pub fn stats(&self) -> TranslationStats {
        let locales: Vec<LocaleStats> = self
            .locales()
            .into_iter()
            .filter_map(|locale| {
                self.translations.get(locale).map(|bundle| LocaleStats {
                    locale: locale.clone(),
                    key_count: bundle.len(),
                    variant_count: bundle.variant_count(),
                })
            })
            .collect();

        let default_key_count = self
            .translations
            .get(&self.default_locale)
            .map_or(0, Bundle::len);

        TranslationStats {
            locales,
            default_key_count,
        }
    }
}

/// Read, decode and flatten one translation file
fn read_bundle(path: &Path) -> Result<Bundle> {
    let content = fs::read(path).map_err(|source| PhrasebookError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Map<String, Value> =
        serde_json::from_slice(&content).map_err(|source| PhrasebookError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(flatten(document))
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    pub locales: Vec<LocaleStats>,
    pub default_key_count: usize,
}

/// Locale-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: Locale,
    pub key_count: usize,
    pub variant_count: usize,
}

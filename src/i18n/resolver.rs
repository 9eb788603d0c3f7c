//! Translation lookup with fallback and template substitution

use std::collections::BTreeMap;
use rand::seq::SliceRandom;
use super::bundle::{Locale, TranslationParams};
use super::catalog::Catalog;
use super::template::{Template, LEFT_DELIM};
use crate::utils::logging;

/// Why a lookup produced no variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    LocaleNotLoaded,
    KeyNotFound,
}

impl Miss {
    fn as_str(self) -> &'static str {
        match self {
            Miss::LocaleNotLoaded => "locale not loaded",
            Miss::KeyNotFound => "key not found",
        }
    }
}

impl Catalog {
    /// Get a translation for a locale and key
    ///
    /// Falls back once to the default locale, then to the key itself. When
    /// `params` is given and the chosen variant contains template actions it is
    /// rendered; a template that fails to parse or render is returned raw.
    pub fn get(&self, locale: &str, key: &str, params: Option<&TranslationParams>) -> String {
        let raw = match self.pick_variant(locale, key) {
            Ok(raw) => raw,
            Err(miss) if locale != self.default_locale.as_str() => {
                logging::log_fallback(locale, self.default_locale.as_str(), key, miss.as_str());
                return self.get_default(key, params);
            }
            Err(miss) => {
                logging::log_unresolved(locale, key, miss.as_str());
                return key.to_string();
            }
        };

        match params {
            Some(params) if raw.contains(LEFT_DELIM) => render(locale, key, raw, params),
            _ => raw.to_string(),
        }
    }

    /// Get a translation from the default locale
    pub fn get_default(&self, key: &str, params: Option<&TranslationParams>) -> String {
        self.get(self.default_locale.as_str(), key, params)
    }

    /// Get a key's translation in every loaded locale
    pub fn get_localizations(&self, key: &str, params: Option<&TranslationParams>) -> BTreeMap<Locale, String> {
        self.translations
            .keys()
            .map(|locale| (locale.clone(), self.get(locale.as_str(), key, params)))
            .collect()
    }

    fn pick_variant(&self, locale: &str, key: &str) -> Result<&str, Miss> {
        let bundle = self.translations.get(locale).ok_or(Miss::LocaleNotLoaded)?;
        bundle
            .variants(key)
            .and_then(|variants| variants.choose(&mut rand::thread_rng()))
            .map(String::as_str)
            .ok_or(Miss::KeyNotFound)
    }
}

fn render(locale: &str, key: &str, raw: &str, params: &TranslationParams) -> String {
    let template = match Template::parse(raw) {
        Ok(template) => template,
        Err(e) => {
            logging::log_template_error(locale, key, "parse", &e);
            return raw.to_string();
        }
    };

    match template.render(params) {
        Ok(text) => text,
        Err(e) => {
            logging::log_template_error(locale, key, "render", &e);
            raw.to_string()
        }
    }
}

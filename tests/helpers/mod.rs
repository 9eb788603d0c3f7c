//! Test helpers module
//!
//! Shared setup for the integration tests: fixture paths, scratch bundle
//! directories and a catalog preloaded with the fixture locales.

#![allow(dead_code)]

pub mod test_context;

pub use test_context::*;

use std::path::PathBuf;
use phrasebook::Catalog;

/// Path to a bundle under `tests/fixtures/locales`
pub fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("locales")
        .join(file_name)
}

/// Catalog with `ru`, `en-US` and `de` loaded and `en-US` as default
pub fn fixture_catalog() -> Catalog {
    init_test_env();

    let mut catalog = Catalog::new();
    for (locale, file) in [("ru", "ru.json"), ("en-US", "en.json"), ("de", "de.json")] {
        catalog
            .load_bundle(locale, fixture_path(file))
            .unwrap_or_else(|e| panic!("Failed to load bundle for {}: {}", locale, e));
    }
    catalog.set_default("en-US");
    catalog
}

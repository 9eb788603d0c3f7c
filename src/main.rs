//! Phrasebook command-line host
//!
//! Loads the configured bundles and resolves a key from the command line.

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use phrasebook::{
    config::Settings,
    i18n::Catalog,
    utils::{helpers, logging},
};

#[derive(Parser, Debug)]
#[command(name = "phrasebook", version, about = "Resolve localized strings from JSON bundles")]
struct Cli {
    /// Settings file name, extension optional
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Locale to resolve in; the configured default when omitted
    #[arg(short, long)]
    locale: Option<String>,

    /// Template variable as NAME=VALUE, repeatable
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// Resolve the key in every loaded locale
    #[arg(long)]
    all: bool,

    /// Print catalog statistics
    #[arg(long, conflicts_with_all = ["all", "key"])]
    stats: bool,

    /// Translation key
    #[arg(required_unless_present = "stats")]
    key: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("loading settings from '{}'", cli.config))?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", phrasebook::info());

    let catalog = match Catalog::from_config(&settings.i18n) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(severity = %e.severity(), recoverable = e.is_recoverable(), error = %e, "Failed to build catalog");
            return Err(e.into());
        }
    };

    if cli.stats {
        let stats = catalog.stats();
        println!("default locale: {} ({} keys)", catalog.default_locale(), stats.default_key_count);
        for locale in &stats.locales {
            println!("{}: {} keys, {} variants", locale.locale, locale.key_count, locale.variant_count);
        }
        return Ok(());
    }

    let key = cli.key.as_deref().unwrap_or_default();
    let params = if cli.vars.is_empty() {
        None
    } else {
        Some(helpers::parse_params(&cli.vars)?)
    };

    if cli.all {
        for (locale, text) in catalog.get_localizations(key, params.as_ref()) {
            println!("{}: {}", locale, text);
        }
    } else {
        let text = match &cli.locale {
            Some(locale) => catalog.get(locale, key, params.as_ref()),
            None => catalog.get_default(key, params.as_ref()),
        };
        println!("{}", text);
    }

    Ok(())
}

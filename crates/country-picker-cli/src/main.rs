//! country-picker-cli — Command-line interface for country-picker-core
//!
//! This binary provides a simple way to inspect the bundled country
//! directory from your terminal. It supports listing the directory,
//! looking up a single country, searching by name/code/calling code,
//! listing the supported UI locales, and exercising the auto-selection
//! flow.
//!
//! Usage examples
//! --------------
//!
//! - List the directory (optionally localized and filtered)
//!   $ country-picker countries
//!   $ country-picker --locale=de --exclude=RU,BY countries
//!
//! - Show details for a country by ISO2 code (case-insensitive)
//!   $ country-picker country us
//!
//! - Search by name, code or calling code
//!   $ country-picker search germ
//!   $ country-picker search +4 --preferred=DE,AT
//!
//! - Simulate the auto-selection flow
//!   $ country-picker auto --device=en_IN
//!   $ country-picker auto --ip        # needs the `ip-lookup` feature
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use country_picker_core::{
    build_directory, pipeline, CountryDataset, CountryPicker, DeviceLocaleProvider,
    DirectoryFilter, LocaleStrings, LocaleTag, PickerConfig, SystemLocaleProvider,
    SUPPORTED_LOCALES,
};

/// Device locale provider backed by a command-line override.
struct CliDevice(Option<String>);

impl DeviceLocaleProvider for CliDevice {
    fn locale_identifier(&self) -> Option<String> {
        match &self.0 {
            Some(id) => Some(id.clone()),
            None => SystemLocaleProvider.locale_identifier(),
        }
    }
}

fn split_codes(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let locale = match args.locale.as_deref() {
        Some(raw) => LocaleTag::resolve(Some(raw)),
        None => LocaleTag::resolve(SystemLocaleProvider.locale_identifier().as_deref()),
    };

    let dataset = CountryDataset::bundled()?;
    let filter = DirectoryFilter {
        include: split_codes(&args.include),
        exclude: split_codes(&args.exclude),
    };
    let directory = build_directory(dataset, locale, &filter);

    match args.command {
        Commands::Countries => {
            for c in &directory {
                println!("{} ({}) {}", c.display_name, c.code(), c.calling_code());
            }
        }

        Commands::Country { code } => match dataset.find(&code) {
            Some(record) => {
                let c = record.resolve(locale);
                println!("Country: {}", c.display_name);
                println!("ISO2: {}", c.code());
                println!("English name: {}", c.english_name());
                println!("Calling code: {}", c.calling_code());
                println!("Currency: {}", record.currency);
                println!("Region: {}", record.region);
            }
            None => {
                eprintln!("No country found for: {code}");
            }
        },

        Commands::Search { query, preferred } => {
            let preferred = split_codes(&preferred);
            let matches = pipeline::compute(&directory, &query, None, &preferred, None);
            if matches.is_empty() {
                println!("No countries found matching: {query}");
            } else {
                for c in matches {
                    println!("{} ({}) {}", c.display_name, c.code(), c.calling_code());
                }
            }
        }

        Commands::Locales => {
            for tag in SUPPORTED_LOCALES {
                let strings = LocaleStrings::for_locale(*tag);
                println!("{} — {}", tag, strings.header_title);
            }
        }

        Commands::Auto { device, ip } => {
            let device = CliDevice(device);
            let config = PickerConfig::new()
                .locale(locale)
                .auto_select_by_device_region(true)
                .auto_select_by_ip(ip)
                .on_select_country(|c| println!("selected: {} ({})", c.display_name, c.code()));
            let mut picker = CountryPicker::with_dataset(config, dataset.clone(), &device);

            if picker.wants_ip_lookup() {
                #[cfg(feature = "ip-lookup")]
                {
                    picker.run_ip_lookup(&country_picker_core::IpInfoProvider::new());
                }
                #[cfg(not(feature = "ip-lookup"))]
                {
                    println!("built without the `ip-lookup` feature; skipping IP lookup");
                    picker.run_ip_lookup(&NoIp);
                }
            }

            match picker.selected() {
                Some(c) => println!("final: {} ({})", c.display_name, c.code()),
                None => println!("final: no selection"),
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "ip-lookup"))]
struct NoIp;

#[cfg(not(feature = "ip-lookup"))]
impl country_picker_core::IpLocationProvider for NoIp {
    fn country_code(&self) -> Option<String> {
        None
    }
}

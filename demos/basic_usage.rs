//! Basic usage example for country-picker-rs
//!
//! This example demonstrates how to:
//! - Build a localized country directory
//! - Apply include/exclude and preferred-country constraints
//! - Search by name, ISO2 code and calling code
//! - Read the localized UI strings

use country_picker_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== Country Picker Basic Usage Example ===\n");

    // Example 1: The full directory, localized for German
    println!("--- Example 1: German directory ---");
    let dataset = CountryDataset::bundled()?;
    let directory = build_directory(dataset, LocaleTag::De, &DirectoryFilter::default());
    println!("Total countries: {}", directory.len());
    for c in directory.iter().take(5) {
        println!("- {} ({}) {}", c.display_name, c.code(), c.calling_code());
    }
    println!("... and {} more\n", directory.len() - 5);

    // Example 2: A restricted directory
    println!("--- Example 2: Include/exclude filters ---");
    let filter = DirectoryFilter {
        include: vec!["DE".into(), "AT".into(), "CH".into(), "FR".into()],
        exclude: vec!["FR".into()],
    };
    let dach = build_directory(dataset, LocaleTag::En, &filter);
    for c in &dach {
        println!("- {} ({})", c.display_name, c.code());
    }
    println!();

    // Example 3: A picker with preferred countries pinned on top
    println!("--- Example 3: Preferred countries ---");
    let config = PickerConfig::new()
        .locale(LocaleTag::En)
        .preferred_countries(["US", "GB"]);
    let picker = CountryPicker::new(config)?;
    for c in picker.visible_countries().iter().take(4) {
        println!("- {} ({})", c.display_name, c.code());
    }
    println!();

    // Example 4: Searching (accent-insensitive, falls back to English)
    println!("--- Example 4: Search ---");
    let mut picker = CountryPicker::new(PickerConfig::new().locale(LocaleTag::De))?;
    for query in ["germ", "+33", "osterreich"] {
        picker.set_query(query);
        let hits = picker.visible_countries();
        println!(
            "query {:?}: {}",
            query,
            hits.iter()
                .map(|c| c.code())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    println!();

    // Example 5: Localized chrome strings
    println!("--- Example 5: UI strings ---");
    for tag in [LocaleTag::En, LocaleTag::De, LocaleTag::Jp] {
        let strings = LocaleStrings::for_locale(tag);
        println!("{}: {} / {}", tag, strings.placeholder, strings.search_placeholder);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

//! Auto-selection example for country-picker-rs
//!
//! Demonstrates the selection precedence (explicit > IP > device region)
//! and the exactly-once notification contract, using fixed providers so
//! the output is deterministic.

use country_picker_rs::prelude::*;

/// Device provider with a scripted locale identifier.
struct ScriptedDevice(&'static str);

impl DeviceLocaleProvider for ScriptedDevice {
    fn locale_identifier(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// IP provider with a scripted answer.
struct ScriptedIp(Option<&'static str>);

impl IpLocationProvider for ScriptedIp {
    fn country_code(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

fn main() -> Result<()> {
    let dataset = CountryDataset::bundled()?.clone();

    // Scenario 1: device region only. The notification fires during
    // construction.
    println!("--- Scenario 1: device region ---");
    let config = PickerConfig::new()
        .auto_select_by_device_region(true)
        .on_select_country(|c| println!("notified: {} ({})", c.display_name, c.code()));
    let picker = CountryPicker::with_dataset(config, dataset.clone(), &ScriptedDevice("en_IN"));
    println!("selected: {:?}\n", picker.selected().map(|c| c.code()));

    // Scenario 2: IP wins over device region, one notification total.
    println!("--- Scenario 2: IP supersedes device region ---");
    let config = PickerConfig::new()
        .auto_select_by_device_region(true)
        .auto_select_by_ip(true)
        .on_select_country(|c| println!("notified: {} ({})", c.display_name, c.code()));
    let mut picker =
        CountryPicker::with_dataset(config, dataset.clone(), &ScriptedDevice("de_DE"));
    println!("before lookup: {:?}", picker.selected().map(|c| c.code()));
    picker.run_ip_lookup(&ScriptedIp(Some("FR")));
    println!("after lookup: {:?}\n", picker.selected().map(|c| c.code()));

    // Scenario 3: the lookup fails, so the device-region selection is
    // finally announced instead.
    println!("--- Scenario 3: IP failure releases the deferred notification ---");
    let config = PickerConfig::new()
        .auto_select_by_device_region(true)
        .auto_select_by_ip(true)
        .on_select_country(|c| println!("notified: {} ({})", c.display_name, c.code()));
    let mut picker =
        CountryPicker::with_dataset(config, dataset.clone(), &ScriptedDevice("de_DE"));
    picker.run_ip_lookup(&ScriptedIp(None));
    println!("after failed lookup: {:?}\n", picker.selected().map(|c| c.code()));

    // Scenario 4: a user tap latches the selection against late results.
    println!("--- Scenario 4: user tap wins ---");
    let config = PickerConfig::new()
        .auto_select_by_ip(true)
        .on_select_country(|c| println!("notified: {} ({})", c.display_name, c.code()));
    let mut picker = CountryPicker::with_dataset(config, dataset, &ScriptedDevice("en_US"));
    picker.begin_ip_lookup();
    picker.select_code("JP");
    picker.complete_ip_lookup(Some("FR"));
    println!("final: {:?}", picker.selected().map(|c| c.code()));

    Ok(())
}

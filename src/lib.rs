//! country-picker-rs
//! =================
//!
//! Workspace facade for the `country-picker-core` selection engine. This
//! crate re-exports the core API and hosts the runnable demos; depend on
//! [`country-picker-core`] directly for library use.
//!
//! [`country-picker-core`]: https://docs.rs/country-picker-core

pub use country_picker_core::*;

/// Convenient glob import for the demos and quick experiments.
pub mod prelude {
    pub use country_picker_core::{
        build_directory, pipeline, CountryDataset, CountryPicker, CountryRecord,
        DeviceLocaleProvider, DirectoryFilter, IpLocationProvider, LocaleStrings, LocaleTag,
        PickerConfig, PickerError, ResolvedCountry, Result, SystemLocaleProvider,
        SUPPORTED_LOCALES,
    };
}

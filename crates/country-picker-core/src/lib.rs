// crates/country-picker-core/src/lib.rs

//! # country-picker-core
//!
//! The selection engine behind a country picker UI: it resolves which
//! language to render country names in, builds and orders the candidate
//! list under search/include/exclude/preferred constraints, and
//! coordinates the two best-effort auto-selection strategies
//! (device region vs. IP geolocation) so the consumer is notified
//! exactly once.
//!
//! Rendering, theming and platform presentation are deliberately out of
//! scope; hosts feed user input in and read the ordered list back out.

pub mod autoselect;
pub mod dataset;
pub mod directory;
pub mod error;
pub mod locale;
pub mod model;
pub mod picker;
pub mod pipeline;
pub mod providers;
pub mod strings;
pub mod text;

// Re-exports
pub use crate::error::{PickerError, Result};
pub use crate::autoselect::{
    AutoSelectCoordinator, AutoSelectOptions, SelectionEvent, SelectionSource,
};
pub use crate::dataset::CountryDataset;
pub use crate::directory::{build_directory, DirectoryFilter};
pub use crate::locale::{LocaleTag, SUPPORTED_LOCALES};
pub use crate::model::{CountryRecord, ResolvedCountry};
pub use crate::picker::{CountryPicker, PickerConfig};
#[cfg(feature = "ip-lookup")]
pub use crate::providers::IpInfoProvider;
pub use crate::providers::{DeviceLocaleProvider, IpLocationProvider, SystemLocaleProvider};
pub use crate::strings::LocaleStrings;
// Text utils
pub use crate::text::{equals_folded, fold_key};

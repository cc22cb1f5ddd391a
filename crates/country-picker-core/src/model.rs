// crates/country-picker-core/src/model.rs

//! The country data model: dataset records and their locale projections.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::locale::LocaleTag;

/// A country entry as it appears in the dataset.
///
/// Immutable once constructed. `names` maps locale tags to display
/// names and always carries at least an `en` entry in the bundled data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code, the unique key (e.g. "US").
    pub code: String,
    /// Display names keyed by locale tag.
    #[serde(rename = "name")]
    pub names: HashMap<String, String>,
    /// International calling code (e.g. "+49"). May be empty.
    #[serde(rename = "callingCode", default)]
    pub calling_code: String,
    /// Opaque flag reference (URI); the core never interprets it.
    #[serde(default)]
    pub flag: String,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    /// Geographic region (e.g. "Europe").
    #[serde(default)]
    pub region: String,
}

impl CountryRecord {
    /// Project the display name for `locale`, falling back to English.
    ///
    /// Returns the empty string when the record carries neither the
    /// requested locale nor an `en` entry. O(1), no side effects.
    pub fn localized_name(&self, locale: LocaleTag) -> &str {
        match self.names.get(locale.as_str()) {
            Some(name) if !name.is_empty() => name,
            _ => self.english_name(),
        }
    }

    /// The English name, or `""` when absent.
    pub fn english_name(&self) -> &str {
        self.names.get("en").map(String::as_str).unwrap_or("")
    }

    /// Materialize a [`ResolvedCountry`] for `locale`.
    pub fn resolve(&self, locale: LocaleTag) -> ResolvedCountry {
        ResolvedCountry {
            display_name: self.localized_name(locale).to_string(),
            record: self.clone(),
        }
    }
}

/// A [`CountryRecord`] projected through a specific locale.
///
/// Created on demand by the directory builder (or supplied verbatim by
/// the caller via the countries override); never persisted independently
/// of its source record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCountry {
    /// The name to render, already resolved for the active locale.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// The underlying dataset record.
    #[serde(flatten)]
    pub record: CountryRecord,
}

impl ResolvedCountry {
    /// ISO 3166-1 alpha-2 code of the underlying record.
    pub fn code(&self) -> &str {
        &self.record.code
    }

    /// English fallback name (used by the search stage).
    pub fn english_name(&self) -> &str {
        self.record.english_name()
    }

    /// International calling code; may be empty.
    pub fn calling_code(&self) -> &str {
        &self.record.calling_code
    }
}

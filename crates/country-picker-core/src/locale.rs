// crates/country-picker-core/src/locale.rs

//! Locale resolution: raw device locale signals -> one supported tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed set of locales the bundled dataset carries names for.
///
/// The tags mirror the dataset's name keys, which predate BCP 47: `cn`
/// is Simplified Chinese, `zh` is Traditional Chinese, `jp` is Japanese,
/// `ua` is Ukrainian, `cz` is Czech, `by` is Belarusian and `ee` is
/// Estonian. [`LocaleTag::resolve`] maps the standard identifiers onto
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleTag {
    En,
    Da,
    Ru,
    Pl,
    Ua,
    Cz,
    By,
    Pt,
    Es,
    Ro,
    Bg,
    De,
    Fr,
    Nl,
    It,
    Cn,
    Zh,
    Ko,
    Ee,
    Jp,
    He,
    El,
    Ar,
    Tr,
    Hu,
}

/// All supported locale tags, in dataset order.
pub const SUPPORTED_LOCALES: &[LocaleTag] = &[
    LocaleTag::En,
    LocaleTag::Da,
    LocaleTag::Ru,
    LocaleTag::Pl,
    LocaleTag::Ua,
    LocaleTag::Cz,
    LocaleTag::By,
    LocaleTag::Pt,
    LocaleTag::Es,
    LocaleTag::Ro,
    LocaleTag::Bg,
    LocaleTag::De,
    LocaleTag::Fr,
    LocaleTag::Nl,
    LocaleTag::It,
    LocaleTag::Cn,
    LocaleTag::Zh,
    LocaleTag::Ko,
    LocaleTag::Ee,
    LocaleTag::Jp,
    LocaleTag::He,
    LocaleTag::El,
    LocaleTag::Ar,
    LocaleTag::Tr,
    LocaleTag::Hu,
];

/// Alias table for historical and alternate codes.
///
/// Kept as flat data rather than branching code so it stays trivially
/// extensible and testable in isolation. Entries cover the Chinese
/// script compounds, ISO 639 codes that differ from the dataset's keys,
/// and legacy Java locale identifiers (`iw` for Hebrew).
const LOCALE_ALIASES: &[(&str, LocaleTag)] = &[
    ("zh-hans", LocaleTag::Cn),
    ("zh-hant", LocaleTag::Zh),
    ("ja", LocaleTag::Jp),
    ("uk", LocaleTag::Ua),
    ("cs", LocaleTag::Cz),
    ("be", LocaleTag::By),
    ("et", LocaleTag::Ee),
    ("iw", LocaleTag::He),
];

impl LocaleTag {
    /// The fallback tag every failed resolution degrades to.
    pub const DEFAULT: LocaleTag = LocaleTag::En;

    /// The tag as it appears in dataset name maps (e.g. `"en"`, `"cn"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleTag::En => "en",
            LocaleTag::Da => "da",
            LocaleTag::Ru => "ru",
            LocaleTag::Pl => "pl",
            LocaleTag::Ua => "ua",
            LocaleTag::Cz => "cz",
            LocaleTag::By => "by",
            LocaleTag::Pt => "pt",
            LocaleTag::Es => "es",
            LocaleTag::Ro => "ro",
            LocaleTag::Bg => "bg",
            LocaleTag::De => "de",
            LocaleTag::Fr => "fr",
            LocaleTag::Nl => "nl",
            LocaleTag::It => "it",
            LocaleTag::Cn => "cn",
            LocaleTag::Zh => "zh",
            LocaleTag::Ko => "ko",
            LocaleTag::Ee => "ee",
            LocaleTag::Jp => "jp",
            LocaleTag::He => "he",
            LocaleTag::El => "el",
            LocaleTag::Ar => "ar",
            LocaleTag::Tr => "tr",
            LocaleTag::Hu => "hu",
        }
    }

    /// Exact match against the supported set (input must be lowercase).
    fn from_exact(code: &str) -> Option<LocaleTag> {
        SUPPORTED_LOCALES.iter().copied().find(|t| t.as_str() == code)
    }

    fn from_alias(code: &str) -> Option<LocaleTag> {
        LOCALE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == code)
            .map(|(_, tag)| *tag)
    }

    /// Resolve a raw device locale identifier to a supported tag.
    ///
    /// Accepts anything the host environment may hand over: `"en_US"`,
    /// `"zh-Hant-TW"`, `"de"`, garbage, or nothing at all. Separators are
    /// normalized, the base language subtag is extracted and, for Chinese
    /// only, the script subtag is honored (the script decides between the
    /// simplified and traditional name sets). Unrecognized input degrades
    /// to [`LocaleTag::DEFAULT`]; this function never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use country_picker_core::LocaleTag;
    ///
    /// assert_eq!(LocaleTag::resolve(Some("en_US")), LocaleTag::En);
    /// assert_eq!(LocaleTag::resolve(Some("zh-Hans-CN")), LocaleTag::Cn);
    /// assert_eq!(LocaleTag::resolve(Some("ja-JP")), LocaleTag::Jp);
    /// assert_eq!(LocaleTag::resolve(Some("klingon")), LocaleTag::En);
    /// assert_eq!(LocaleTag::resolve(None), LocaleTag::En);
    /// ```
    pub fn resolve(raw: Option<&str>) -> LocaleTag {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        let normalized = raw.trim().replace('_', "-").to_lowercase();
        let mut subtags = normalized.split('-').filter(|s| !s.is_empty());
        let Some(language) = subtags.next() else {
            return Self::DEFAULT;
        };

        // The script subtag carries the meaning for Chinese: zh-Hans is a
        // different name set than zh-Hant. Check the compound first.
        if language == "zh" {
            if let Some(script) = subtags.next() {
                if let Some(tag) = Self::from_alias(&format!("{language}-{script}")) {
                    return tag;
                }
            }
        }

        Self::from_exact(language)
            .or_else(|| Self::from_alias(language))
            .unwrap_or(Self::DEFAULT)
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

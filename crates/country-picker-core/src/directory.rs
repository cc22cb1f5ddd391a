// crates/country-picker-core/src/directory.rs

//! Directory construction: dataset records -> ordered, localized,
//! include/exclude-filtered list.

use std::collections::HashSet;

use crate::dataset::CountryDataset;
use crate::locale::LocaleTag;
use crate::model::ResolvedCountry;

/// Include/exclude configuration for [`build_directory`].
///
/// Codes are matched case-insensitively; codes not present in the
/// dataset are silently ignored. An empty include list means "no include
/// filter" rather than "include nothing".
#[derive(Clone, Debug, Default)]
pub struct DirectoryFilter {
    /// When non-empty, only the listed codes survive.
    pub include: Vec<String>,
    /// Removed after `include` is applied, so an excluded code loses
    /// even if `include` admitted it.
    pub exclude: Vec<String>,
}

impl DirectoryFilter {
    pub fn is_noop(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

fn code_set(codes: &[String]) -> HashSet<String> {
    codes
        .iter()
        .map(|c| c.trim().to_ascii_uppercase())
        .collect()
}

/// Materialize the picker's country list from `dataset`.
///
/// Dataset order is preserved; each name is projected through `locale`
/// with English fallback. The output never contains a code twice (the
/// dataset is deduplicated at construction and this is a pure
/// projection of it).
pub fn build_directory(
    dataset: &CountryDataset,
    locale: LocaleTag,
    filter: &DirectoryFilter,
) -> Vec<ResolvedCountry> {
    let include = (!filter.include.is_empty()).then(|| code_set(&filter.include));
    let exclude = (!filter.exclude.is_empty()).then(|| code_set(&filter.exclude));

    dataset
        .records()
        .iter()
        .filter(|r| {
            let code = r.code.to_ascii_uppercase();
            include.as_ref().map_or(true, |set| set.contains(&code))
                && exclude.as_ref().map_or(true, |set| !set.contains(&code))
        })
        .map(|r| r.resolve(locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exclude_beats_include() {
        let ds = CountryDataset::bundled().unwrap();
        let filter = DirectoryFilter {
            include: strings(&["US", "DE"]),
            exclude: strings(&["de"]),
        };
        let dir = build_directory(ds, LocaleTag::En, &filter);
        let codes: Vec<&str> = dir.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["US"]);
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let ds = CountryDataset::bundled().unwrap();
        let filter = DirectoryFilter {
            include: strings(&["FR", "ZZ"]),
            exclude: strings(&["QQ"]),
        };
        let dir = build_directory(ds, LocaleTag::En, &filter);
        let codes: Vec<&str> = dir.iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!["FR"]);
    }

    #[test]
    fn dataset_order_is_preserved() {
        let ds = CountryDataset::bundled().unwrap();
        let dir = build_directory(ds, LocaleTag::En, &DirectoryFilter::default());
        let expected: Vec<&str> = ds.records().iter().map(|r| r.code.as_str()).collect();
        let got: Vec<&str> = dir.iter().map(|c| c.code()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn names_are_projected_through_locale() {
        let ds = CountryDataset::bundled().unwrap();
        let filter = DirectoryFilter {
            include: strings(&["DE"]),
            ..Default::default()
        };
        let dir = build_directory(ds, LocaleTag::De, &filter);
        assert_eq!(dir[0].display_name, "Deutschland");
    }
}

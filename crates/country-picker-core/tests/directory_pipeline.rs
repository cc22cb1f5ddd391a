//! Directory building and the search/preferred/selected pipeline.

use country_picker_core::{
    build_directory, pipeline, CountryDataset, CountryRecord, DirectoryFilter, LocaleTag,
    ResolvedCountry,
};
use std::collections::HashMap;

fn country(code: &str, en: &str, calling: &str) -> ResolvedCountry {
    let mut names = HashMap::new();
    names.insert("en".to_string(), en.to_string());
    CountryRecord {
        code: code.to_string(),
        names,
        calling_code: calling.to_string(),
        flag: String::new(),
        currency: String::new(),
        region: String::new(),
    }
    .resolve(LocaleTag::En)
}

/// Small three-country directory, in caller order.
fn us_de_fr() -> Vec<ResolvedCountry> {
    vec![
        country("US", "United States", "+1"),
        country("DE", "Germany", "+49"),
        country("FR", "France", "+33"),
    ]
}

fn codes(list: &[ResolvedCountry]) -> Vec<&str> {
    list.iter().map(|c| c.code()).collect()
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn include_then_exclude() {
    let ds = CountryDataset::bundled().unwrap();
    let dir = build_directory(
        ds,
        LocaleTag::En,
        &DirectoryFilter {
            include: strings(&["US", "DE"]),
            exclude: strings(&["DE"]),
        },
    );
    assert_eq!(codes(&dir), vec!["US"]);
}

#[test]
fn preferred_order_follows_caller_list() {
    let out = pipeline::compute(&us_de_fr(), "", None, &strings(&["FR", "US"]), None);
    assert_eq!(codes(&out), vec!["FR", "US", "DE"]);
}

#[test]
fn selected_pinning_overrides_preferred() {
    let selected = country("DE", "Germany", "+49");
    let out = pipeline::compute(
        &us_de_fr(),
        "",
        Some(&selected),
        &strings(&["FR", "US"]),
        None,
    );
    assert_eq!(codes(&out), vec!["DE", "FR", "US"]);
}

#[test]
fn search_suppresses_preferred_pinning() {
    // "us" matches the US code and nothing else in this directory;
    // FR being preferred must not resurrect it.
    let out = pipeline::compute(&us_de_fr(), "us", None, &strings(&["FR"]), None);
    assert_eq!(codes(&out), vec!["US"]);
}

#[test]
fn search_matches_name_code_and_calling_code() {
    let dir = us_de_fr();

    let by_name = pipeline::compute(&dir, "germ", None, &[], None);
    assert_eq!(codes(&by_name), vec!["DE"]);

    let by_code = pipeline::compute(&dir, "fr", None, &[], None);
    assert_eq!(codes(&by_code), vec!["FR"]);

    let by_calling_code = pipeline::compute(&dir, "+49", None, &[], None);
    assert_eq!(codes(&by_calling_code), vec!["DE"]);
}

#[test]
fn search_is_accent_and_case_insensitive() {
    let ds = CountryDataset::bundled().unwrap();
    let dir = build_directory(ds, LocaleTag::De, &DirectoryFilter::default());
    // German display name "Österreich", searched without the umlaut.
    let out = pipeline::compute(&dir, "osterreich", None, &[], None);
    assert_eq!(codes(&out), vec!["AT"]);
}

#[test]
fn search_falls_back_to_english_name() {
    let ds = CountryDataset::bundled().unwrap();
    let dir = build_directory(ds, LocaleTag::De, &DirectoryFilter::default());
    // Display name is "Deutschland"; the English fallback still matches.
    let out = pipeline::compute(&dir, "germany", None, &[], None);
    assert_eq!(codes(&out), vec!["DE"]);
}

#[test]
fn selection_is_pinned_even_mid_search() {
    let dir = vec![
        country("GB", "United Kingdom", "+44"),
        country("US", "United States", "+1"),
    ];
    let selected = country("US", "United States", "+1");
    let out = pipeline::compute(&dir, "united", Some(&selected), &[], None);
    assert_eq!(codes(&out), vec!["US", "GB"]);
}

#[test]
fn selection_outside_search_results_is_not_forced() {
    let selected = country("DE", "Germany", "+49");
    let out = pipeline::compute(&us_de_fr(), "france", Some(&selected), &[], None);
    assert_eq!(codes(&out), vec!["FR"]);
}

#[test]
fn whitespace_query_is_no_filter() {
    let out = pipeline::compute(&us_de_fr(), "   ", None, &[], None);
    assert_eq!(codes(&out), vec!["US", "DE", "FR"]);
}

#[test]
fn custom_filter_replaces_all_stages() {
    let selected = country("DE", "Germany", "+49");
    let custom = |directory: &[ResolvedCountry], _query: &str| -> Vec<ResolvedCountry> {
        let mut reversed: Vec<ResolvedCountry> = directory.to_vec();
        reversed.reverse();
        reversed
    };
    // Selected pinning and preferred ordering must NOT be re-applied on
    // top of the custom filter's output.
    let out = pipeline::compute(
        &us_de_fr(),
        "ignored",
        Some(&selected),
        &strings(&["FR"]),
        Some(&custom),
    );
    assert_eq!(codes(&out), vec!["FR", "DE", "US"]);
}

#[test]
fn compute_is_idempotent() {
    let dir = us_de_fr();
    let selected = country("FR", "France", "+33");
    let first = pipeline::compute(&dir, "", Some(&selected), &strings(&["US"]), None);
    let second = pipeline::compute(&dir, "", Some(&selected), &strings(&["US"]), None);
    assert_eq!(first, second);
}

#[test]
fn no_duplicate_codes_in_any_output() {
    let ds = CountryDataset::bundled().unwrap();
    let dir = build_directory(ds, LocaleTag::En, &DirectoryFilter::default());
    let selected = country("US", "United States", "+1");
    let out = pipeline::compute(&dir, "", Some(&selected), &strings(&["US", "DE"]), None);
    let mut seen = std::collections::HashSet::new();
    for c in &out {
        assert!(seen.insert(c.code().to_string()), "duplicate {}", c.code());
    }
    assert_eq!(out[0].code(), "US");
}

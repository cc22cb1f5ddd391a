// crates/country-picker-core/src/picker.rs

//! The caller-facing picker: configuration, live state and callbacks.
//!
//! A [`CountryPicker`] is the in-memory core of one widget instance. It
//! owns the built directory, the live search query and the selection
//! state machine; rendering layers read [`visible_countries`] back out
//! after every input change. All recomputation is pure, so eager
//! re-runs are safe.
//!
//! [`visible_countries`]: CountryPicker::visible_countries

use std::fmt;

use crate::autoselect::{AutoSelectCoordinator, AutoSelectOptions};
use crate::dataset::CountryDataset;
use crate::directory::{build_directory, DirectoryFilter};
use crate::error::Result;
use crate::locale::LocaleTag;
use crate::model::ResolvedCountry;
use crate::pipeline;
use crate::providers::{DeviceLocaleProvider, IpLocationProvider, SystemLocaleProvider};
use crate::strings::LocaleStrings;

/// Callback fired when the selection changes (user tap or auto-select).
pub type SelectCallback = Box<dyn FnMut(&ResolvedCountry)>;
/// Pass-through callback fired on every query change.
pub type SearchCallback = Box<dyn FnMut(&str)>;
/// Boxed form of [`pipeline::CustomFilter`].
pub type FilterFn = Box<pipeline::CustomFilter>;

/// Configuration inputs for a picker instance.
///
/// Built fluently:
///
/// ```rust
/// use country_picker_core::{LocaleTag, PickerConfig};
///
/// let config = PickerConfig::new()
///     .locale(LocaleTag::De)
///     .exclude_countries(["RU", "BY"])
///     .preferred_countries(["DE", "AT", "CH"]);
/// ```
#[derive(Default)]
pub struct PickerConfig {
    pub locale: Option<LocaleTag>,
    pub include_countries: Vec<String>,
    pub exclude_countries: Vec<String>,
    pub preferred_countries: Vec<String>,
    /// Full replacement list. When set, localization and filtering are
    /// the caller's responsibility; the list is used verbatim.
    pub countries: Option<Vec<ResolvedCountry>>,
    /// Explicit initial selection; disables all auto-selection.
    pub selected_country: Option<ResolvedCountry>,
    pub auto_select_by_device_region: bool,
    pub auto_select_by_ip: bool,
    pub filter_countries: Option<FilterFn>,
    pub on_select_country: Option<SelectCallback>,
    pub on_search: Option<SearchCallback>,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a locale instead of resolving the device's.
    pub fn locale(mut self, locale: LocaleTag) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn include_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_countries = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_countries = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn preferred_countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_countries = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the directory wholesale (escape hatch, not a partial
    /// override).
    pub fn countries(mut self, countries: Vec<ResolvedCountry>) -> Self {
        self.countries = Some(countries);
        self
    }

    pub fn selected_country(mut self, country: ResolvedCountry) -> Self {
        self.selected_country = Some(country);
        self
    }

    pub fn auto_select_by_device_region(mut self, enabled: bool) -> Self {
        self.auto_select_by_device_region = enabled;
        self
    }

    pub fn auto_select_by_ip(mut self, enabled: bool) -> Self {
        self.auto_select_by_ip = enabled;
        self
    }

    /// Replace the built-in search/ordering stages entirely.
    pub fn filter_countries(
        mut self,
        filter: impl Fn(&[ResolvedCountry], &str) -> Vec<ResolvedCountry> + 'static,
    ) -> Self {
        self.filter_countries = Some(Box::new(filter));
        self
    }

    pub fn on_select_country(mut self, callback: impl FnMut(&ResolvedCountry) + 'static) -> Self {
        self.on_select_country = Some(Box::new(callback));
        self
    }

    pub fn on_search(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_search = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for PickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("locale", &self.locale)
            .field("include_countries", &self.include_countries)
            .field("exclude_countries", &self.exclude_countries)
            .field("preferred_countries", &self.preferred_countries)
            .field("countries", &self.countries.as_ref().map(Vec::len))
            .field("selected_country", &self.selected_country)
            .field(
                "auto_select_by_device_region",
                &self.auto_select_by_device_region,
            )
            .field("auto_select_by_ip", &self.auto_select_by_ip)
            .field("filter_countries", &self.filter_countries.is_some())
            .finish()
    }
}

/// One widget instance's in-memory core.
pub struct CountryPicker {
    locale: LocaleTag,
    dataset: CountryDataset,
    directory: Vec<ResolvedCountry>,
    preferred: Vec<String>,
    filter_countries: Option<FilterFn>,
    query: String,
    coordinator: AutoSelectCoordinator,
    on_select_country: Option<SelectCallback>,
    on_search: Option<SearchCallback>,
}

impl CountryPicker {
    /// Build a picker over the bundled dataset with the system locale
    /// provider. The synchronous auto-selection step runs here; if it
    /// produces a notification, `on_select_country` fires before this
    /// returns.
    pub fn new(config: PickerConfig) -> Result<Self> {
        let dataset = CountryDataset::bundled()?.clone();
        Ok(Self::with_dataset(config, dataset, &SystemLocaleProvider))
    }

    /// Build a picker over a caller-supplied dataset and device locale
    /// provider. This is also the constructor tests use to inject fixed
    /// signals.
    pub fn with_dataset(
        config: PickerConfig,
        dataset: CountryDataset,
        device: &dyn DeviceLocaleProvider,
    ) -> Self {
        let locale = config
            .locale
            .unwrap_or_else(|| LocaleTag::resolve(device.locale_identifier().as_deref()));

        let directory = match config.countries {
            // Escape hatch: caller list verbatim, no localization or
            // include/exclude filtering on top.
            Some(list) => list,
            None => build_directory(
                &dataset,
                locale,
                &DirectoryFilter {
                    include: config.include_countries,
                    exclude: config.exclude_countries,
                },
            ),
        };

        let coordinator = AutoSelectCoordinator::new(
            AutoSelectOptions {
                by_device_region: config.auto_select_by_device_region,
                by_ip: config.auto_select_by_ip,
            },
            config.selected_country,
        );

        let mut picker = Self {
            locale,
            dataset,
            directory,
            preferred: config.preferred_countries,
            filter_countries: config.filter_countries,
            query: String::new(),
            coordinator,
            on_select_country: config.on_select_country,
            on_search: config.on_search,
        };

        let event = picker
            .coordinator
            .initialize(&picker.dataset, picker.locale, device);
        if let Some(event) = event {
            picker.notify_select(&event.country);
        }
        picker
    }

    /// The final ordered list to render, honoring search, preferred
    /// pinning and selected pinning (or the caller's custom filter).
    pub fn visible_countries(&self) -> Vec<ResolvedCountry> {
        pipeline::compute(
            &self.directory,
            &self.query,
            self.coordinator.selected(),
            &self.preferred,
            self.filter_countries.as_deref(),
        )
    }

    /// Update the live search query; fires `on_search` (pass-through,
    /// the pipeline reads the query on the next recomputation).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if let Some(callback) = self.on_search.as_mut() {
            callback(&self.query);
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// User tap: latches the selection (auto-selection can no longer
    /// override it), clears the query and fires `on_select_country`.
    pub fn select(&mut self, country: ResolvedCountry) {
        self.coordinator.user_selected(country.clone());
        self.query.clear();
        self.notify_select(&country);
    }

    /// Select a country from the current directory by ISO2 code.
    /// Returns `false` when the code is not in the directory.
    pub fn select_code(&mut self, code: &str) -> bool {
        let found = self
            .directory
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
            .cloned();
        match found {
            Some(country) => {
                self.select(country);
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&ResolvedCountry> {
        self.coordinator.selected()
    }

    /// Whether the host should issue the one-shot IP lookup.
    pub fn wants_ip_lookup(&self) -> bool {
        self.coordinator.wants_ip_lookup()
    }

    /// Latch the IP attempt; returns `true` exactly once per instance.
    pub fn begin_ip_lookup(&mut self) -> bool {
        self.coordinator.begin_ip_lookup()
    }

    /// Feed the IP lookup result back in (`None` = failure). Fires
    /// `on_select_country` per the coordinator's precedence rules.
    pub fn complete_ip_lookup(&mut self, code: Option<&str>) {
        let event = self
            .coordinator
            .complete_ip_lookup(code, &self.dataset, self.locale);
        if let Some(event) = event {
            self.notify_select(&event.country);
        }
    }

    /// Drive the one-shot IP lookup with `provider` on the current
    /// thread. Hosts with their own async runtime should instead call
    /// [`begin_ip_lookup`](Self::begin_ip_lookup), perform the request
    /// themselves, and resume via
    /// [`complete_ip_lookup`](Self::complete_ip_lookup).
    pub fn run_ip_lookup(&mut self, provider: &dyn IpLocationProvider) {
        if self.begin_ip_lookup() {
            let code = provider.country_code();
            self.complete_ip_lookup(code.as_deref());
        }
    }

    /// Tear down: late IP completions become no-ops.
    pub fn dispose(&mut self) {
        self.coordinator.dispose();
    }

    pub fn locale(&self) -> LocaleTag {
        self.locale
    }

    /// Localized chrome strings for this picker's locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        LocaleStrings::for_locale(self.locale)
    }

    /// The built directory before search/ordering.
    pub fn directory(&self) -> &[ResolvedCountry] {
        &self.directory
    }

    fn notify_select(&mut self, country: &ResolvedCountry) {
        if let Some(callback) = self.on_select_country.as_mut() {
            callback(country);
        }
    }
}

impl fmt::Debug for CountryPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryPicker")
            .field("locale", &self.locale)
            .field("directory", &self.directory.len())
            .field("query", &self.query)
            .field("selected", &self.coordinator.selected().map(|c| c.code()))
            .finish()
    }
}

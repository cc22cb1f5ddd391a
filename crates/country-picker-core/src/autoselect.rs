// crates/country-picker-core/src/autoselect.rs

//! Auto-selection coordination.
//!
//! Two best-effort strategies compete to pre-select a country: a
//! synchronous device-region lookup and an asynchronous IP geolocation
//! lookup. The coordinator enforces precedence
//! (explicit > user tap > IP > device region) and guarantees the
//! consumer sees at most one auto-selection notification.
//!
//! All one-shot guards live as explicit fields on the per-instance
//! coordinator, never as ambient state, so multiple picker instances
//! can coexist without sharing latches.

use log::{debug, warn};

use crate::dataset::CountryDataset;
use crate::locale::LocaleTag;
use crate::model::ResolvedCountry;
use crate::providers::DeviceLocaleProvider;

/// Which path produced the current selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionSource {
    /// Supplied by the caller at construction.
    Explicit,
    /// Synchronous device-region lookup.
    DeviceRegion,
    /// Asynchronous IP geolocation lookup.
    IpLookup,
    /// User interaction.
    User,
}

/// A selection change that should reach the consumer's callback.
#[derive(Clone, Debug)]
pub struct SelectionEvent {
    pub country: ResolvedCountry,
    pub source: SelectionSource,
}

/// Which auto-selection strategies are enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoSelectOptions {
    pub by_device_region: bool,
    pub by_ip: bool,
}

/// Per-instance selection state machine.
///
/// Lifecycle: [`AutoSelectCoordinator::initialize`] runs the synchronous
/// step once; the host then drives the optional IP lookup through
/// [`begin_ip_lookup`](Self::begin_ip_lookup) /
/// [`complete_ip_lookup`](Self::complete_ip_lookup). A user selection
/// latches permanently and turns any late IP completion into a no-op,
/// as does [`dispose`](Self::dispose).
#[derive(Debug)]
pub struct AutoSelectCoordinator {
    options: AutoSelectOptions,
    explicit: bool,
    selected: Option<ResolvedCountry>,
    source: Option<SelectionSource>,
    // One-shot latches; set exactly once, never reset.
    initialized: bool,
    device_region_notified: bool,
    ip_attempted: bool,
    user_latched: bool,
    disposed: bool,
}

impl AutoSelectCoordinator {
    /// An explicit caller-supplied selection is terminal: no
    /// auto-selection logic runs and no auto-selection flags are ever
    /// set for this instance.
    pub fn new(options: AutoSelectOptions, explicit: Option<ResolvedCountry>) -> Self {
        let is_explicit = explicit.is_some();
        Self {
            options,
            explicit: is_explicit,
            source: explicit.as_ref().map(|_| SelectionSource::Explicit),
            selected: explicit,
            initialized: false,
            device_region_notified: false,
            ip_attempted: false,
            user_latched: false,
            disposed: false,
        }
    }

    /// Synchronous step, effective exactly once.
    ///
    /// With no explicit selection and device-region auto-select enabled,
    /// looks up the device's region code and maps it onto `dataset`.
    /// Returns the notification to fire, which only happens when IP
    /// auto-select is *not* also enabled — when it is, the IP path owns
    /// the final notification so the consumer is not told twice with two
    /// different countries in quick succession.
    ///
    /// Re-invocations (host re-renders) are no-ops.
    pub fn initialize(
        &mut self,
        dataset: &CountryDataset,
        locale: LocaleTag,
        device: &dyn DeviceLocaleProvider,
    ) -> Option<SelectionEvent> {
        if self.initialized {
            return None;
        }
        self.initialized = true;

        if self.explicit || !self.options.by_device_region {
            return None;
        }

        let Some(region) = device.region_code() else {
            debug!("device region unavailable; no auto-selection from device");
            return None;
        };
        let Some(record) = dataset.find(&region) else {
            debug!("device region {region} not in dataset; skipping");
            return None;
        };

        let country = record.resolve(locale);
        self.selected = Some(country.clone());
        self.source = Some(SelectionSource::DeviceRegion);

        if self.options.by_ip {
            // Deferred: the IP completion handler decides whether this
            // selection is superseded or finally announced.
            return None;
        }
        self.device_region_notified = true;
        Some(SelectionEvent {
            country,
            source: SelectionSource::DeviceRegion,
        })
    }

    /// Whether the host should issue the (single) IP lookup.
    pub fn wants_ip_lookup(&self) -> bool {
        self.options.by_ip && !self.explicit && !self.ip_attempted && !self.disposed
    }

    /// Latch the one-shot "already attempted" flag.
    ///
    /// Returns `true` exactly once per instance when IP auto-select
    /// applies; re-renders and remounts never issue a second request.
    pub fn begin_ip_lookup(&mut self) -> bool {
        if !self.wants_ip_lookup() {
            return false;
        }
        self.ip_attempted = true;
        true
    }

    /// Completion handler for the IP lookup.
    ///
    /// On success with a code that maps into `dataset`, the selection is
    /// overwritten (superseding any device-region guess) and the
    /// notification to fire is returned. On failure or an unmapped code
    /// the IP path sets nothing — but if a device-region selection is
    /// standing with its notification still deferred, that notification
    /// is released now so the consumer is not left with a visible
    /// selection it was never told about.
    ///
    /// A completion arriving after the user has chosen, or after
    /// [`dispose`](Self::dispose), is ignored entirely.
    pub fn complete_ip_lookup(
        &mut self,
        code: Option<&str>,
        dataset: &CountryDataset,
        locale: LocaleTag,
    ) -> Option<SelectionEvent> {
        if self.disposed || self.user_latched || self.explicit {
            return None;
        }

        if let Some(country) = code.and_then(|c| map_ip_code(c, dataset, locale)) {
            self.selected = Some(country.clone());
            self.source = Some(SelectionSource::IpLookup);
            return Some(SelectionEvent {
                country,
                source: SelectionSource::IpLookup,
            });
        }

        // IP path yielded nothing: release the deferred device-region
        // notification, if one is standing.
        if self.device_region_notified {
            return None;
        }
        match (&self.selected, self.source) {
            (Some(country), Some(SelectionSource::DeviceRegion)) => {
                self.device_region_notified = true;
                Some(SelectionEvent {
                    country: country.clone(),
                    source: SelectionSource::DeviceRegion,
                })
            }
            _ => None,
        }
    }

    /// User interaction always wins and latches: any auto-selection
    /// arriving afterwards (notably a slow IP response) is discarded.
    pub fn user_selected(&mut self, country: ResolvedCountry) {
        self.user_latched = true;
        self.source = Some(SelectionSource::User);
        self.selected = Some(country);
    }

    /// Current selection, from whichever path set it last.
    pub fn selected(&self) -> Option<&ResolvedCountry> {
        self.selected.as_ref()
    }

    /// Source of the current selection, if any.
    pub fn source(&self) -> Option<SelectionSource> {
        self.source
    }

    /// Tear down: subsequent completions become no-ops. There is no way
    /// to abort an in-flight request, so this is the guard the
    /// resumption path checks.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Map an IP lookup result onto the dataset. Anything that is not a
/// two-letter code, or does not map, is a miss.
fn map_ip_code(code: &str, dataset: &CountryDataset, locale: LocaleTag) -> Option<ResolvedCountry> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        warn!("IP lookup returned unusable country code {code:?}");
        return None;
    }
    match dataset.find(code) {
        Some(record) => Some(record.resolve(locale)),
        None => {
            debug!("IP country {code} not in dataset; skipping");
            None
        }
    }
}

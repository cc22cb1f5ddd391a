// crates/country-picker-core/src/providers.rs

//! External collaborators: device locale signals and IP geolocation.
//!
//! Both are trait-abstracted so hosts (and tests) can inject their own
//! sources. Every provider is best-effort: failures are logged and
//! reported as `None`, never as errors.

/// Read-only view of the host device's locale signals.
pub trait DeviceLocaleProvider {
    /// Raw locale identifier as the platform reports it, e.g. `"en_US"`
    /// or `"zh-Hant-TW"`. `None` when the platform has nothing to offer.
    fn locale_identifier(&self) -> Option<String>;

    /// ISO 3166-1 alpha-2 region code derived from the locale signals.
    fn region_code(&self) -> Option<String> {
        region_from_identifier(&self.locale_identifier()?)
    }
}

/// Default provider backed by the `sys-locale` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLocaleProvider;

impl DeviceLocaleProvider for SystemLocaleProvider {
    fn locale_identifier(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Extract the region subtag from a locale identifier
/// (`"en_US"` -> `"US"`, `"zh-Hant-TW"` -> `"TW"`).
///
/// The UN M.49 Latin-America group tag `419` names no country and
/// yields `None`.
pub(crate) fn region_from_identifier(raw: &str) -> Option<String> {
    let normalized = raw.trim().replace('_', "-");
    for subtag in normalized.split('-').skip(1) {
        if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(subtag.to_ascii_uppercase());
        }
        if subtag == "419" {
            return None;
        }
    }
    None
}

/// A single best-effort network lookup resolving the caller's country.
///
/// Implementations return an ISO2 code on success and `None` on any
/// failure; the coordinator guarantees at most one call per picker
/// instance.
pub trait IpLocationProvider {
    fn country_code(&self) -> Option<String>;
}

#[cfg(feature = "ip-lookup")]
pub use self::ipinfo::IpInfoProvider;

#[cfg(feature = "ip-lookup")]
mod ipinfo {
    use super::IpLocationProvider;
    use log::warn;
    use serde::Deserialize;

    /// Default geolocation endpoint.
    pub const IP_LOOKUP_URL: &str = "https://ipinfo.io/json";

    #[derive(Deserialize)]
    struct IpInfoResponse {
        country: Option<String>,
    }

    /// Bundled IP geolocation provider querying ipinfo.io over a
    /// blocking HTTP client. Hosts with their own networking stack
    /// should implement [`IpLocationProvider`] instead.
    #[derive(Clone, Debug)]
    pub struct IpInfoProvider {
        url: String,
    }

    impl IpInfoProvider {
        pub fn new() -> Self {
            Self {
                url: IP_LOOKUP_URL.to_string(),
            }
        }

        /// Point the provider at a different endpoint returning the same
        /// JSON shape (useful for self-hosted mirrors and tests).
        pub fn with_url(url: impl Into<String>) -> Self {
            Self { url: url.into() }
        }
    }

    impl Default for IpInfoProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IpLocationProvider for IpInfoProvider {
        fn country_code(&self) -> Option<String> {
            let response = match reqwest::blocking::get(&self.url) {
                Ok(response) => response,
                Err(e) => {
                    warn!("IP geolocation request failed: {e}");
                    return None;
                }
            };
            match response.json::<IpInfoResponse>() {
                Ok(body) => body.country,
                Err(e) => {
                    warn!("IP geolocation response unreadable: {e}");
                    None
                }
            }
        }
    }
}

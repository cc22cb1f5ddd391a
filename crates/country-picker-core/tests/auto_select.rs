//! Auto-selection coordination: precedence, one-shot latches and
//! exactly-once notification.

use country_picker_core::{
    CountryDataset, CountryPicker, DeviceLocaleProvider, IpLocationProvider, PickerConfig,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Device locale provider with a fixed signal.
struct FixedDevice(Option<&'static str>);

impl DeviceLocaleProvider for FixedDevice {
    fn locale_identifier(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

/// IP provider with a canned answer.
struct FixedIp(Option<&'static str>);

impl IpLocationProvider for FixedIp {
    fn country_code(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

type Events = Rc<RefCell<Vec<String>>>;

fn picker_with_events(
    config: PickerConfig,
    device: &dyn DeviceLocaleProvider,
) -> (CountryPicker, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let config = config.on_select_country(move |c| sink.borrow_mut().push(c.code().to_string()));
    let dataset = CountryDataset::bundled().unwrap().clone();
    (CountryPicker::with_dataset(config, dataset, device), events)
}

#[test]
fn device_region_only_notifies_exactly_once() {
    let device = FixedDevice(Some("en_IN"));
    let (picker, events) = picker_with_events(
        PickerConfig::new().auto_select_by_device_region(true),
        &device,
    );
    assert_eq!(*events.borrow(), vec!["IN".to_string()]);
    assert_eq!(picker.selected().unwrap().code(), "IN");
    assert!(!picker.wants_ip_lookup());
}

#[test]
fn ip_supersedes_device_region_with_single_notification() {
    let device = FixedDevice(Some("de_DE"));
    let (mut picker, events) = picker_with_events(
        PickerConfig::new()
            .auto_select_by_device_region(true)
            .auto_select_by_ip(true),
        &device,
    );
    // Device region resolved synchronously but its notification is
    // deferred: the IP path owns the final announcement.
    assert_eq!(picker.selected().unwrap().code(), "DE");
    assert!(events.borrow().is_empty());

    picker.run_ip_lookup(&FixedIp(Some("FR")));
    assert_eq!(picker.selected().unwrap().code(), "FR");
    assert_eq!(*events.borrow(), vec!["FR".to_string()]);
}

#[test]
fn failed_ip_lookup_releases_deferred_device_notification() {
    let device = FixedDevice(Some("de_DE"));
    let (mut picker, events) = picker_with_events(
        PickerConfig::new()
            .auto_select_by_device_region(true)
            .auto_select_by_ip(true),
        &device,
    );
    assert!(events.borrow().is_empty());

    picker.run_ip_lookup(&FixedIp(None));
    // The visible device-region selection is finally announced instead
    // of leaving the consumer unnotified.
    assert_eq!(picker.selected().unwrap().code(), "DE");
    assert_eq!(*events.borrow(), vec!["DE".to_string()]);
}

#[test]
fn ip_only_selects_and_notifies() {
    let device = FixedDevice(None);
    let (mut picker, events) =
        picker_with_events(PickerConfig::new().auto_select_by_ip(true), &device);
    assert!(picker.selected().is_none());

    picker.run_ip_lookup(&FixedIp(Some("jp")));
    assert_eq!(picker.selected().unwrap().code(), "JP");
    assert_eq!(*events.borrow(), vec!["JP".to_string()]);
}

#[test]
fn explicit_selection_disables_auto_select() {
    let dataset = CountryDataset::bundled().unwrap();
    let explicit = dataset.find("CH").unwrap().resolve(Default::default());

    let device = FixedDevice(Some("de_DE"));
    let (mut picker, events) = picker_with_events(
        PickerConfig::new()
            .selected_country(explicit)
            .auto_select_by_device_region(true)
            .auto_select_by_ip(true),
        &device,
    );
    assert_eq!(picker.selected().unwrap().code(), "CH");
    assert!(!picker.wants_ip_lookup());
    assert!(!picker.begin_ip_lookup());
    // A stray completion changes nothing either.
    picker.complete_ip_lookup(Some("FR"));
    assert_eq!(picker.selected().unwrap().code(), "CH");
    assert!(events.borrow().is_empty());
}

#[test]
fn ip_attempt_is_one_shot() {
    let device = FixedDevice(None);
    let (mut picker, _events) =
        picker_with_events(PickerConfig::new().auto_select_by_ip(true), &device);
    assert!(picker.begin_ip_lookup());
    // Re-renders/remounts must never issue a second request.
    assert!(!picker.begin_ip_lookup());
    assert!(!picker.wants_ip_lookup());
}

#[test]
fn user_tap_beats_late_ip_completion() {
    let device = FixedDevice(Some("de_DE"));
    let (mut picker, events) = picker_with_events(
        PickerConfig::new()
            .auto_select_by_device_region(true)
            .auto_select_by_ip(true),
        &device,
    );
    assert!(picker.begin_ip_lookup());

    // User taps Japan while the lookup is in flight.
    assert!(picker.select_code("JP"));
    assert_eq!(*events.borrow(), vec!["JP".to_string()]);

    // The stale IP response must not override the user's choice.
    picker.complete_ip_lookup(Some("FR"));
    assert_eq!(picker.selected().unwrap().code(), "JP");
    assert_eq!(*events.borrow(), vec!["JP".to_string()]);
}

#[test]
fn disposed_picker_ignores_late_completion() {
    let device = FixedDevice(None);
    let (mut picker, events) =
        picker_with_events(PickerConfig::new().auto_select_by_ip(true), &device);
    assert!(picker.begin_ip_lookup());
    picker.dispose();

    picker.complete_ip_lookup(Some("FR"));
    assert!(picker.selected().is_none());
    assert!(events.borrow().is_empty());
}

#[test]
fn unmapped_or_malformed_ip_results_are_misses() {
    let device = FixedDevice(None);
    let (mut picker, events) =
        picker_with_events(PickerConfig::new().auto_select_by_ip(true), &device);

    picker.run_ip_lookup(&FixedIp(Some("ZZ")));
    assert!(picker.selected().is_none());
    assert!(events.borrow().is_empty());

    // Not a two-letter code either.
    let (mut picker, events) =
        picker_with_events(PickerConfig::new().auto_select_by_ip(true), &FixedDevice(None));
    picker.run_ip_lookup(&FixedIp(Some("United States")));
    assert!(picker.selected().is_none());
    assert!(events.borrow().is_empty());
}

#[test]
fn device_region_miss_leaves_initial_state() {
    // Locale carries no region subtag at all.
    let device = FixedDevice(Some("en"));
    let (picker, events) = picker_with_events(
        PickerConfig::new().auto_select_by_device_region(true),
        &device,
    );
    assert!(picker.selected().is_none());
    assert!(events.borrow().is_empty());
}

#[test]
fn user_selection_pins_and_clears_query() {
    let device = FixedDevice(None);
    let (mut picker, events) = picker_with_events(PickerConfig::new(), &device);

    picker.set_query("jap");
    assert!(picker.select_code("JP"));
    assert_eq!(picker.query(), "");
    assert_eq!(*events.borrow(), vec!["JP".to_string()]);

    let visible = picker.visible_countries();
    assert_eq!(visible[0].code(), "JP");
}

#[test]
fn on_search_is_a_pass_through() {
    let queries: Events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&queries);
    let config = PickerConfig::new().on_search(move |q| sink.borrow_mut().push(q.to_string()));
    let dataset = CountryDataset::bundled().unwrap().clone();
    let mut picker = CountryPicker::with_dataset(config, dataset, &FixedDevice(None));

    picker.set_query("a");
    picker.set_query("au");
    assert_eq!(*queries.borrow(), vec!["a".to_string(), "au".to_string()]);
}

use component_tracker::{ComponentTracker, LocationResolver, ModeGate, TrackingMode};
use component_tracker_mock::{MockComponent, MockLocator, StackBuilder};

fn tracker_with(locator: std::sync::Arc<MockLocator>) -> ComponentTracker {
    ComponentTracker::new(ModeGate::new(locator), LocationResolver::default())
}

#[test]
fn test_no_current_service_disables_tracking() {
    let tracker = tracker_with(MockLocator::absent());
    let button = MockComponent::new("app::Button");

    assert!(!tracker.is_active());
    tracker.track_create(&button);
    tracker.track_create_from(&button, &StackBuilder::new().call("app::View", "new").build());

    assert!(tracker.find_create(&button).is_none());
    assert!(tracker.create_locations().is_empty());
}

#[test]
fn test_broken_chain_links_disable_tracking() {
    for locator in [
        MockLocator::builder().without_context().build(),
        MockLocator::builder().without_configuration().build(),
    ] {
        let tracker = tracker_with(locator);
        let button = MockComponent::new("app::Button");
        tracker.track_attach_from(&button, &StackBuilder::new().call("app::View", "new").build());
        assert!(tracker.find_attach(&button).is_none());
        assert_eq!(tracker.gate().mode(), TrackingMode::Unknown);
    }
}

#[test]
fn test_production_mode_is_inert() {
    let locator = MockLocator::production();
    let tracker = tracker_with(locator.clone());
    let button = MockComponent::new("app::Button");

    for _ in 0..3 {
        tracker.track_create(&button);
        tracker.track_attach(&button);
    }

    assert!(tracker.find_create(&button).is_none());
    assert!(tracker.find_attach(&button).is_none());
    assert_eq!(tracker.gate().mode(), TrackingMode::Inactive);
    assert_eq!(locator.lookups(), 1);
}

#[test]
fn test_development_mode_resolved_once() {
    let locator = MockLocator::development();
    let tracker = tracker_with(locator.clone());
    let button = MockComponent::new("app::Button");
    let stack = StackBuilder::new().call("app::View", "new").build();

    tracker.track_create_from(&button, &stack);
    tracker.track_attach_from(&button, &stack);

    assert!(tracker.find_create(&button).is_some());
    assert!(tracker.find_attach(&button).is_some());
    assert_eq!(tracker.gate().mode(), TrackingMode::Active);
    assert_eq!(locator.lookups(), 1);
}

#[test]
fn test_unresolved_lookup_is_retried_every_call() {
    let locator = MockLocator::absent();
    let tracker = tracker_with(locator.clone());

    assert!(!tracker.is_active());
    assert!(!tracker.is_active());
    assert_eq!(locator.lookups(), 2);
}

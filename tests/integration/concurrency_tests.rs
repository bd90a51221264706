use component_tracker::{ComponentTracker, LocationResolver, ModeGate};
use component_tracker_mock::{MockComponent, MockLocator, StackBuilder};
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_sessions_track_their_own_components() {
    let tracker = Arc::new(ComponentTracker::new(
        ModeGate::new(MockLocator::development()),
        LocationResolver::default(),
    ));

    let handles: Vec<_> = (0..8u32)
        .map(|session| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                let view = format!("app::SessionView{}", session);
                let components: Vec<_> = (0..50)
                    .map(|_| MockComponent::new("app::Button"))
                    .collect();
                for (i, component) in components.iter().enumerate() {
                    let stack = StackBuilder::new().frame(&view, "new", i as u32).build();
                    tracker.track_create_from(component, &stack);
                    tracker.track_attach_from(component, &stack);
                }
                for (i, component) in components.iter().enumerate() {
                    let created = tracker.find_create(component).unwrap();
                    assert_eq!(created.class_name, view);
                    assert_eq!(created.line_number, Some(i as u32));
                    assert_eq!(tracker.find_attach(component), Some(created));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

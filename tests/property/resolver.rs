use super::utils::{internal_class, method_name, user_class};
use component_tracker::{Frame, FrameFilter, LocationResolver};
use proptest::prelude::*;

fn resolver() -> LocationResolver {
    LocationResolver::new(FrameFilter::with_prefixes(["internal::"]))
}

proptest! {
    #[test]
    fn test_internal_frames_never_resolved(
        internals in prop::collection::vec((internal_class(), method_name()), 0..16),
        target in user_class(),
        method in method_name(),
        line in 0u32..100_000,
    ) {
        let mut stack: Vec<Frame> = internals
            .iter()
            .map(|(class, m)| Frame::new(class.as_str(), m.as_str(), None, None))
            .collect();
        stack.push(Frame::new(target.as_str(), method.as_str(), Some("view.rs".into()), Some(line)));

        let loc = resolver().resolve(&stack, None, None).unwrap();
        prop_assert_eq!(loc.class_name, target);
        prop_assert_eq!(loc.method_name, method);
        prop_assert_eq!(loc.line_number, Some(line));
    }

    #[test]
    fn test_excluded_class_is_never_returned(
        excluded in user_class(),
        internals in prop::collection::vec(internal_class(), 0..8),
        repeats in 1usize..6,
    ) {
        let mut stack: Vec<Frame> = (0..repeats)
            .map(|i| Frame::new(excluded.as_str(), format!("step{}", i), None, Some(i as u32)))
            .collect();
        stack.extend(internals.iter().map(|class| Frame::new(class.as_str(), "run", None, None)));

        prop_assert!(resolver().resolve(&stack, Some(excluded.as_str()), None).is_none());
    }

    #[test]
    fn test_preferred_class_found_anywhere_wins(
        classes in prop::collection::hash_set(user_class(), 2..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let classes: Vec<String> = classes.into_iter().collect();
        let preferred = pick.get(&classes).clone();
        let stack: Vec<Frame> = classes
            .iter()
            .enumerate()
            .map(|(i, class)| Frame::new(class.as_str(), "call", None, Some(i as u32)))
            .collect();

        let loc = resolver().resolve(&stack, None, Some(preferred.as_str())).unwrap();
        prop_assert_eq!(&loc.class_name, &preferred);

        let first = resolver().resolve(&stack, None, None).unwrap();
        prop_assert_eq!(&first.class_name, &classes[0]);
    }
}

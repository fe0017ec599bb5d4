//! Property tests for pattern and path normalization.

use filters::{PatternSet, clean, matches, normalize};
use proptest::prelude::*;

fn path_component() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(".".to_owned()),
        Just("..".to_owned()),
        "[a-z]{1,6}",
        "[a-z]{1,3}\\.[a-z]{1,3}",
    ]
}

fn raw_path() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(path_component(), 0..8)).prop_map(
        |(rooted, parts)| {
            let joined = parts.join("/");
            if rooted { format!("/{joined}") } else { joined }
        },
    )
}

fn raw_pattern() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(
            prop_oneof![Just("*".to_owned()), Just("?".to_owned()), "[a-z]{1,4}"],
            1..4,
        ),
        "[ \t]{0,2}",
    )
        .prop_map(|(negated, parts, padding)| {
            let body = parts.join("/");
            if negated {
                format!("{padding}!{body}{padding}")
            } else {
                format!("{padding}{body}{padding}")
            }
        })
}

proptest! {
    #[test]
    fn clean_is_idempotent(path in raw_path()) {
        let once = clean(&path);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn clean_never_returns_empty_or_trailing_slash(path in raw_path()) {
        let cleaned = clean(&path);
        prop_assert!(!cleaned.is_empty());
        prop_assert!(cleaned == "/" || !cleaned.ends_with('/'));
        prop_assert!(!cleaned.contains("//"));
    }

    #[test]
    fn normalizing_normalized_patterns_is_identity(
        raw in prop::collection::vec(raw_pattern(), 0..6),
    ) {
        let first = normalize(&raw).unwrap();
        let cleaned: Vec<&str> = first.patterns().collect();
        let second = normalize(&cleaned).unwrap();
        prop_assert_eq!(second.patterns().collect::<Vec<_>>(), cleaned);
        prop_assert_eq!(second.has_exclusions(), first.has_exclusions());
    }

    #[test]
    fn blank_entries_never_occupy_a_slot(
        raw in prop::collection::vec(raw_pattern(), 0..6),
        blanks in 0usize..4,
    ) {
        let mut padded = raw.clone();
        padded.extend(std::iter::repeat_n("   ".to_owned(), blanks));
        let set = PatternSet::new(&padded).unwrap();
        prop_assert_eq!(set.len(), raw.len());
        prop_assert_eq!(set.segments().len(), set.len());
    }

    #[test]
    fn bare_marker_poisons_any_batch(
        raw in prop::collection::vec(raw_pattern(), 0..6),
        position in 0usize..6,
    ) {
        let mut with_marker = raw.clone();
        let index = position.min(with_marker.len());
        with_marker.insert(index, "!".to_owned());
        let err = normalize(&with_marker).unwrap_err();
        prop_assert!(err.is_invalid_pattern());
    }

    #[test]
    fn root_is_never_matched(raw in prop::collection::vec(raw_pattern(), 0..6)) {
        prop_assert!(!matches(".", &raw).unwrap());
    }
}

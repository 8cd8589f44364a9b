//! The bounded check agrees with the full computation.

use damlev::{osa_distance_chars, osa_within};
use proptest::prelude::*;

/// Maximum distance threshold (typically 2 in fuzzy search).
const MAX_DISTANCE: usize = 2;

fn short_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eé]{0,7}").unwrap()
}

proptest! {
    /// Property: osa_within(a, b, k) == (d(a, b) <= k)
    #[test]
    fn prop_within_agrees_with_distance(
        a in short_word_strategy(),
        b in short_word_strategy(),
        max in 0usize..=4
    ) {
        let distance = osa_distance_chars(&a, &b);
        prop_assert_eq!(
            osa_within(&a, &b, max),
            distance <= max,
            "a={:?} b={:?} distance={} max={}",
            a, b, distance, max
        );
    }

    /// Property: a string is within distance 0 of itself
    #[test]
    fn prop_within_self(s in short_word_strategy()) {
        prop_assert!(osa_within(&s, &s, 0));
    }

    /// Property: a length gap beyond the threshold always rejects
    #[test]
    fn prop_length_gap_rejects(a in short_word_strategy(), b in short_word_strategy()) {
        let gap = a.chars().count().abs_diff(b.chars().count());
        if gap > MAX_DISTANCE {
            prop_assert!(!osa_within(&a, &b, MAX_DISTANCE));
        }
    }

    /// Property: raising the threshold never turns a match into a miss
    #[test]
    fn prop_within_monotone_in_threshold(
        a in short_word_strategy(),
        b in short_word_strategy(),
        max in 0usize..=3
    ) {
        if osa_within(&a, &b, max) {
            prop_assert!(osa_within(&a, &b, max + 1));
        }
    }
}

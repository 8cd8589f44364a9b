//! The recurrence over different code units.

use damlev::{calculate_distance, osa_distance, osa_distance_chars, osa_similarity, osa_within};

#[test]
fn test_bytes_count_each_utf8_unit() {
    // ū is two bytes, so by byte the swap is not between adjacent units
    assert_eq!(osa_distance_chars("ūk", "kū"), 1);
    assert_eq!(calculate_distance("ūk", "kū"), 2);
}

#[test]
fn test_chars_on_non_latin_script() {
    assert_eq!(osa_distance_chars("తెలుగు", "తెలుగు"), 0);
    assert_eq!(osa_distance_chars("హరీష్", "హరిష్"), 1);
}

#[test]
fn test_combining_marks_are_separate_units() {
    // e + U+0301 versus precomposed é: one substitution plus one deletion
    assert_eq!(osa_distance_chars("cafe\u{301}", "café"), 2);
}

#[test]
fn test_utf16_units() {
    let source: Vec<u16> = "résumé".encode_utf16().collect();
    let target: Vec<u16> = "resume".encode_utf16().collect();
    assert_eq!(osa_distance(&source, &target), 2);
}

#[test]
fn test_word_tokens() {
    let source: Vec<&str> = "the quick brown fox".split(' ').collect();
    let target: Vec<&str> = "the brown quick fox".split(' ').collect();
    assert_eq!(osa_distance(&source, &target), 1);
}

#[test]
fn test_within_matches_char_distance() {
    for (source, target) in [("café", "cafe"), ("harīṣh", "harish"), ("tōkyō", "kyoto")] {
        let distance = osa_distance_chars(source, target);
        assert!(osa_within(source, target, distance));
        if distance > 0 {
            assert!(!osa_within(source, target, distance - 1));
        }
    }
}

#[test]
fn test_similarity_by_char() {
    assert_eq!(osa_similarity("naïve", "naïve"), 1.0);
    assert!((osa_similarity("naïve", "naive") - 0.8).abs() < 1e-12);
    assert_eq!(osa_similarity("", "abc"), 0.0);
}

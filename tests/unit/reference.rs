//! Literal scenarios the distance has always produced.

use super::common::{REFERENCE_CASES, TYPO_CASES};
use damlev::{calculate_distance, osa_distance};

#[test]
fn test_reference_cases() {
    for &(source, target, expected) in REFERENCE_CASES {
        assert_eq!(
            calculate_distance(source, target),
            expected,
            "distance({:?}, {:?})",
            source,
            target
        );
    }
}

#[test]
fn test_reference_cases_are_symmetric() {
    for &(source, target, expected) in REFERENCE_CASES {
        assert_eq!(calculate_distance(target, source), expected);
    }
}

#[test]
fn test_typos() {
    for &(source, target, expected) in TYPO_CASES {
        assert_eq!(
            calculate_distance(source, target),
            expected,
            "distance({:?}, {:?})",
            source,
            target
        );
    }
}

#[test]
fn test_transposition_is_cheaper_than_two_substitutions() {
    assert_eq!(calculate_distance("CA", "AC"), 1);
    assert_eq!(strsim::levenshtein("CA", "AC"), 2);
}

#[test]
fn test_restricted_alignment_does_not_edit_swapped_pair() {
    // Unrestricted Damerau-Levenshtein swaps then inserts between the pair.
    assert_eq!(calculate_distance("CA", "ABC"), 3);
    assert_eq!(strsim::damerau_levenshtein("CA", "ABC"), 2);
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = calculate_distance("deduplicate", "dedpulicate");
    for _ in 0..10 {
        assert_eq!(calculate_distance("deduplicate", "dedpulicate"), first);
    }
    assert_eq!(first, 1);
}

#[test]
fn test_no_case_folding() {
    assert_eq!(calculate_distance("Rust", "rust"), 1);
    assert_eq!(osa_distance(b"ABC".as_slice(), b"abc".as_slice()), 3);
}

#[test]
fn test_long_identical_inputs() {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
    assert_eq!(calculate_distance(&text, &text), 0);
    assert_eq!(calculate_distance(&text, ""), text.len());
}

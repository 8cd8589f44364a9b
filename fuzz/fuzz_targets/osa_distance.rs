// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance and its matrix.
//!
//! Arbitrary bytes in. The distance must never panic, must be symmetric, and
//! must stay within its length bounds. The debug contracts inside `osa_matrix`
//! check every cell on top of that.

#![no_main]

use arbitrary::Arbitrary;
use damlev::{calculate_distance, osa_distance, osa_matrix, VerifiedMatrix};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: two byte strings
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    source: Vec<u8>,
    target: Vec<u8>,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts (O(n·m) table)
    let source = &input.source[..input.source.len().min(128)];
    let target = &input.target[..input.target.len().min(128)];

    let distance = osa_distance(source, target);

    // INVARIANT 1: symmetric
    assert_eq!(distance, osa_distance(target, source));

    // INVARIANT 2: bounded by the lengths
    assert!(distance >= source.len().abs_diff(target.len()));
    assert!(distance <= source.len().max(target.len()));

    // INVARIANT 3: zero only for equal inputs
    assert_eq!(distance == 0, source == target);

    // INVARIANT 4: the full table passes verification
    let matrix = osa_matrix(source, target);
    assert_eq!(matrix.distance(), distance);
    if let Err(e) = VerifiedMatrix::new(matrix, source, target) {
        panic!("matrix failed verification: {}", e);
    }

    // INVARIANT 5: the &str entry point is the byte distance
    let source_text = String::from_utf8_lossy(source);
    let target_text = String::from_utf8_lossy(target);
    assert_eq!(
        calculate_distance(&source_text, &target_text),
        osa_distance(source_text.as_bytes(), target_text.as_bytes())
    );
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded check.
//!
//! The early exits must be sound: whatever `osa_within` answers has to match
//! the full computation. A wrong early exit is a silently missed fuzzy match.

#![no_main]

use arbitrary::Arbitrary;
use damlev::{osa_distance_chars, osa_within};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for bounded matching
#[derive(Debug, Arbitrary)]
struct WithinInput {
    source: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: WithinInput| {
    // Cap lengths to avoid timeouts
    let source: String = input.source.chars().take(64).collect();
    let target: String = input.target.chars().take(64).collect();
    let max = usize::from(input.max % 8);

    let distance = osa_distance_chars(&source, &target);
    assert_eq!(
        osa_within(&source, &target, max),
        distance <= max,
        "source={:?} target={:?} distance={} max={}",
        source,
        target,
        distance,
        max
    );
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the optimal string alignment recurrence.
//!
//! The recurrence is restated over a stack-allocated table so every input up
//! to `MAX_LEN` bytes can be explored symbolically.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no out-of-bounds index or overflow for any input
//! 2. **Bounds**: `|n - m| <= d <= max(n, m)`
//! 3. **Identity**: `d(s, s) == 0`
//! 4. **Symmetry**: `d(a, b) == d(b, a)`
//! 5. **Swap**: one adjacent transposition costs at most 1

/// Longest input the fixed table holds.
pub const MAX_LEN: usize = 4;

// ============================================================================
// RECURRENCE (restated from src/osa.rs over a fixed table)
// ============================================================================

/// Distance between two byte strings of at most `MAX_LEN` bytes.
///
/// Returns `None` if either input is too long for the table.
pub fn osa_distance(source: &[u8], target: &[u8]) -> Option<usize> {
    let n = source.len();
    let m = target.len();
    if n > MAX_LEN || m > MAX_LEN {
        return None;
    }

    let mut table = [[0usize; MAX_LEN + 1]; MAX_LEN + 1];
    for i in 0..=n {
        table[i][0] = i;
    }
    for j in 0..=m {
        table[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(source[i - 1] != target[j - 1]);
            let mut best = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && source[i - 1] == target[j - 2] && source[i - 2] == target[j - 1]
            {
                best = best.min(table[i - 2][j - 2] + cost);
            }
            table[i][j] = best;
        }
    }

    Some(table[n][m])
}


// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic byte string of symbolic length up to `MAX_LEN`.
    fn any_input() -> ([u8; MAX_LEN], usize) {
        let bytes: [u8; MAX_LEN] = kani::any();
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        (bytes, len)
    }

    /// Verify the recurrence never panics and respects its bounds.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_osa_bounds() {
        let (a, n) = any_input();
        let (b, m) = any_input();

        let distance = osa_distance(&a[..n], &b[..m]);
        kani::assert(distance.is_some(), "inputs within MAX_LEN must be accepted");

        let distance = distance.unwrap_or(0);
        kani::assert(distance <= n.max(m), "distance must not exceed max(n, m)");
        kani::assert(distance >= n.abs_diff(m), "distance must cover the length gap");
    }

    /// Verify d(s, s) == 0.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_osa_identity() {
        let (a, n) = any_input();
        kani::assert(
            osa_distance(&a[..n], &a[..n]) == Some(0),
            "a string is at distance 0 from itself",
        );
    }

    /// Verify d(a, b) == d(b, a).
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_osa_symmetry() {
        let (a, n) = any_input();
        let (b, m) = any_input();
        kani::assert(
            osa_distance(&a[..n], &b[..m]) == osa_distance(&b[..m], &a[..n]),
            "distance must be symmetric",
        );
    }

    /// Verify one adjacent swap costs at most 1.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_osa_single_swap() {
        let (a, n) = any_input();
        kani::assume(n >= 2);
        let pos: usize = kani::any_where(|&p| p < n - 1);

        let mut swapped = a;
        swapped.swap(pos, pos + 1);

        let distance = osa_distance(&a[..n], &swapped[..n]).unwrap_or(usize::MAX);
        kani::assert(distance <= 1, "an adjacent swap costs at most 1");
    }
}

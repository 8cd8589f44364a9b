// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal string alignment distance.
//!
//! Wagner-Fischer with one extra case: if the last two units of each prefix are
//! a swapped pair, the cell may also come from two steps up the diagonal. That
//! gives insert, delete, substitute, and adjacent transpose at cost 1 each.
//!
//! # Restriction
//!
//! This is the *restricted* Damerau-Levenshtein distance. A substring is edited
//! at most once, so a transposed pair can't be edited again afterwards:
//!
//! ```
//! // Unrestricted Damerau-Levenshtein gives 2 (CA -> AC -> ABC).
//! assert_eq!(damlev::calculate_distance("CA", "ABC"), 3);
//! ```
//!
//! The restricted metric also breaks the triangle inequality on inputs like
//! this one, so don't prune candidates with it as if it were a true metric.

use crate::verify::contracts::check_osa_matrix;
use crate::DistanceMatrix;

/// Do the last two units of `source[..i]` and `target[..j]` form a swapped pair?
#[inline]
pub(crate) fn transposition_applies<T: PartialEq>(
    source: &[T],
    target: &[T],
    i: usize,
    j: usize,
) -> bool {
    i > 1 && j > 1 && source[i - 1] == target[j - 2] && source[i - 2] == target[j - 1]
}

/// Fill the full `(n + 1) × (m + 1)` distance table.
///
/// Row-major, increasing indices: each cell reads its left, upper, upper-left,
/// and (for swaps) two-up-two-left neighbours, all of which are already final.
pub fn osa_matrix<T: PartialEq>(source: &[T], target: &[T]) -> DistanceMatrix {
    let n = source.len();
    let m = target.len();
    let mut matrix = DistanceMatrix::new(n, m);

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(source[i - 1] != target[j - 1]);

            let deletion = matrix[(i - 1, j)] + 1;
            let insertion = matrix[(i, j - 1)] + 1;
            let substitution = matrix[(i - 1, j - 1)] + cost;
            let mut best = deletion.min(insertion).min(substitution);

            // The swap reuses `cost`; when it is 0 all four units are equal and
            // the substitution branch already matched.
            if transposition_applies(source, target, i, j) {
                best = best.min(matrix[(i - 2, j - 2)] + cost);
            }

            matrix[(i, j)] = best;
        }
    }

    check_osa_matrix(&matrix, source, target);
    matrix
}

/// Optimal string alignment distance over any slice of comparable units.
///
/// Units are compared with `==` only: no case folding, no normalization.
/// Total over all inputs, including two empty slices.
///
/// ```
/// use damlev::osa_distance;
///
/// assert_eq!(osa_distance(&[1, 2, 3], &[1, 3, 2]), 1);
/// assert_eq!(osa_distance::<u8>(&[], &[]), 0);
/// ```
pub fn osa_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    osa_matrix(source, target).distance()
}

/// Edit distance between two strings, indexed by byte.
///
/// Each byte is one unit, so a multi-byte UTF-8 character that differs costs
/// one substitution per differing byte. Use [`osa_distance_chars`] to compare
/// by Unicode scalar value instead.
///
/// ```
/// use damlev::calculate_distance;
///
/// assert_eq!(calculate_distance("CAT", "COT"), 1);
/// assert_eq!(calculate_distance("CA", "AC"), 1);
/// assert_eq!(calculate_distance("DOG", "CAT"), 3);
/// ```
pub fn calculate_distance(source: &str, target: &str) -> usize {
    osa_distance(source.as_bytes(), target.as_bytes())
}

/// Edit distance between two strings, indexed by `char`.
///
/// Scalar values, not grapheme clusters: a base letter plus a combining mark
/// counts as two units.
pub fn osa_distance_chars(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    osa_distance(&source, &target)
}

/// Are these strings within `max` edits of each other (by `char`)?
///
/// Bounded distance with two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If every cell in a finished row exceeds `max`, abandon the DP
///
/// The second exit is sound because row minima never decrease: a swap reaches
/// back to row `i - 2`, but row `i - 1` already holds a substitution path no
/// more than one above it.
///
/// Keeps three rolling rows instead of the full table.
pub fn osa_within(source: &str, target: &str, max: usize) -> bool {
    let a: Vec<char> = source.chars().collect();
    let b: Vec<char> = target.chars().collect();

    // Early-exit: length difference is a lower bound on edit distance
    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut two_back: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut min_row = curr[0];

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if transposition_applies(&a, &b, i, j) {
                best = best.min(two_back[j - 2] + cost);
            }
            curr[j] = best;
            min_row = min_row.min(best);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }

        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()] <= max
}

/// Normalized similarity by `char`: `1 - distance / max(len)`, in `[0.0, 1.0]`.
///
/// Two empty strings are identical and score `1.0`.
pub fn osa_similarity(source: &str, target: &str) -> f64 {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let longest = source.len().max(target.len());
    if longest == 0 {
        return 1.0;
    }

    1.0 - osa_distance(&source, &target) as f64 / longest as f64
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode assertions over a freshly filled distance matrix.
//!
//! Every check here is a `debug_assert!`, so release builds compile them away.
//! `osa_matrix` calls [`check_osa_matrix`] once after the fill.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function         | Property                                   |
//! |---------------------------|--------------------------------------------|
//! | `check_base_cases`        | `m[0][j] == j`, `m[i][0] == i`             |
//! | `check_cell_bounds`       | `i.abs_diff(j) <= m[i][j] <= max(i, j)`    |
//! | `check_diagonal_steps`    | `m[i][j] - m[i-1][j-1] ∈ {0, 1}` off swaps |

use crate::osa::transposition_applies;
use crate::DistanceMatrix;

/// Run every matrix contract.
#[inline]
pub fn check_osa_matrix<T: PartialEq>(matrix: &DistanceMatrix, source: &[T], target: &[T]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        (matrix.rows(), matrix.cols()),
        (source.len() + 1, target.len() + 1),
        "Contract violation: matrix shape does not match input lengths"
    );

    check_base_cases(matrix);
    check_cell_bounds(matrix);
    check_diagonal_steps(matrix, source, target);
}

/// Row 0 and column 0 hold the pure insertion/deletion costs.
#[inline]
pub fn check_base_cases(matrix: &DistanceMatrix) {
    for j in 0..matrix.cols() {
        // INVARIANT: empty source to j target units costs j insertions
        debug_assert_eq!(
            matrix[(0, j)],
            j,
            "Contract violation: base row matrix[0][{}]",
            j
        );
    }
    for i in 0..matrix.rows() {
        // INVARIANT: i source units to empty target costs i deletions
        debug_assert_eq!(
            matrix[(i, 0)],
            i,
            "Contract violation: base column matrix[{}][0]",
            i
        );
    }
}

/// Every cell lies between the forced length difference and the longer prefix.
#[inline]
pub fn check_cell_bounds(matrix: &DistanceMatrix) {
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            let value = matrix[(i, j)];
            // INVARIANT: substitutions plus the leftover insertions/deletions suffice
            debug_assert!(
                value <= i.max(j),
                "Contract violation: matrix[{}][{}] = {} > max({}, {})",
                i,
                j,
                value,
                i,
                j
            );
            // INVARIANT: no operation other than insert/delete changes length
            debug_assert!(
                value >= i.abs_diff(j),
                "Contract violation: matrix[{}][{}] = {} < |{} - {}|",
                i,
                j,
                value,
                i,
                j
            );
        }
    }
}

/// Moving one step down the diagonal costs a match or a substitution.
///
/// The only way to land below the diagonal predecessor is the transposition
/// branch, so the lower bound is skipped on those cells.
#[inline]
pub fn check_diagonal_steps<T: PartialEq>(matrix: &DistanceMatrix, source: &[T], target: &[T]) {
    for i in 1..matrix.rows() {
        for j in 1..matrix.cols() {
            let value = matrix[(i, j)];
            let diagonal = matrix[(i - 1, j - 1)];
            // INVARIANT: a substitution is always available
            debug_assert!(
                value <= diagonal + 1,
                "Contract violation: matrix[{}][{}] = {} > diagonal {} + 1",
                i,
                j,
                value,
                diagonal
            );
            if !transposition_applies(source, target, i, j) {
                // INVARIANT: without a swap the diagonal never decreases
                debug_assert!(
                    value >= diagonal,
                    "Contract violation: matrix[{}][{}] = {} < diagonal {}",
                    i,
                    j,
                    value,
                    diagonal
                );
            }
        }
    }
}

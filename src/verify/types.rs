// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A matrix wrapper that can only exist if the table is consistent.
//!
//! `VerifiedMatrix::new` walks every cell once and checks it against the inputs
//! the table was filled for. The cost is O(n·m), the same as filling it, so this
//! is for tests, fuzzing, and deserialized tables, not the hot path.
//!
//! | Check                        | Guarantee                                      |
//! |------------------------------|------------------------------------------------|
//! | `DimensionMismatch`          | `rows = n + 1`, `cols = m + 1`                 |
//! | `BaseRowMismatch`            | `matrix[0][j] == j`                            |
//! | `BaseColumnMismatch`         | `matrix[i][0] == i`                            |
//! | `CellAboveUpperBound`        | `matrix[i][j] <= max(i, j)`                    |
//! | `CellBelowLengthDifference`  | `matrix[i][j] >= i.abs_diff(j)`                |
//! | `DiagonalStepTooLarge`       | `matrix[i][j] <= matrix[i-1][j-1] + 1`         |
//! | `DiagonalDecrease`           | no decrease along the diagonal unless a swap applies |

use crate::osa::transposition_applies;
use crate::DistanceMatrix;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A table needs at least one row and one column.
    EmptyDimensions { rows: usize, cols: usize },
    /// The cell buffer does not hold `rows * cols` cells.
    CellCountMismatch {
        rows: usize,
        cols: usize,
        cells: usize,
    },
    /// The table shape does not match the input lengths.
    DimensionMismatch {
        rows: usize,
        cols: usize,
        source_len: usize,
        target_len: usize,
    },
    /// `matrix[0][j] != j`.
    BaseRowMismatch { col: usize, value: usize },
    /// `matrix[i][0] != i`.
    BaseColumnMismatch { row: usize, value: usize },
    /// A cell costs more than rewriting the longer prefix outright.
    CellAboveUpperBound { row: usize, col: usize, value: usize },
    /// A cell costs less than the insertions/deletions its lengths force.
    CellBelowLengthDifference { row: usize, col: usize, value: usize },
    /// A cell exceeds its diagonal predecessor by more than one substitution.
    DiagonalStepTooLarge {
        row: usize,
        col: usize,
        value: usize,
        diagonal: usize,
    },
    /// A cell is cheaper than its diagonal predecessor with no swap to explain it.
    DiagonalDecrease {
        row: usize,
        col: usize,
        value: usize,
        diagonal: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyDimensions { rows, cols } => {
                write!(f, "matrix dimensions {}x{} have no cells", rows, cols)
            }
            InvariantError::CellCountMismatch { rows, cols, cells } => {
                write!(f, "{} cells do not fill a {}x{} matrix", cells, rows, cols)
            }
            InvariantError::DimensionMismatch {
                rows,
                cols,
                source_len,
                target_len,
            } => {
                write!(
                    f,
                    "{}x{} matrix cannot describe inputs of length {} and {}",
                    rows, cols, source_len, target_len
                )
            }
            InvariantError::BaseRowMismatch { col, value } => {
                write!(f, "matrix[0][{}] = {}, expected {}", col, value, col)
            }
            InvariantError::BaseColumnMismatch { row, value } => {
                write!(f, "matrix[{}][0] = {}, expected {}", row, value, row)
            }
            InvariantError::CellAboveUpperBound { row, col, value } => {
                write!(
                    f,
                    "matrix[{}][{}] = {} exceeds max({}, {})",
                    row, col, value, row, col
                )
            }
            InvariantError::CellBelowLengthDifference { row, col, value } => {
                write!(
                    f,
                    "matrix[{}][{}] = {} is below |{} - {}|",
                    row, col, value, row, col
                )
            }
            InvariantError::DiagonalStepTooLarge {
                row,
                col,
                value,
                diagonal,
            } => {
                write!(
                    f,
                    "matrix[{}][{}] = {} exceeds diagonal {} + 1",
                    row, col, value, diagonal
                )
            }
            InvariantError::DiagonalDecrease {
                row,
                col,
                value,
                diagonal,
            } => {
                write!(
                    f,
                    "matrix[{}][{}] = {} is below diagonal {} without a transposition",
                    row, col, value, diagonal
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// A distance matrix whose cells satisfy every structural invariant for its inputs.
///
/// This is a consistency check, not a recomputation: a table filled for other
/// inputs of the same shape can still pass.
///
/// # Invariants (enforced at construction)
/// - Shape is `(source.len() + 1) × (target.len() + 1)`
/// - Base row and column count insertions and deletions
/// - Every cell lies in `[|i - j|, max(i, j)]`
/// - Every diagonal step is 0 or 1, except where an adjacent swap lowers it
#[derive(Debug, Clone)]
pub struct VerifiedMatrix {
    inner: DistanceMatrix,
}

impl VerifiedMatrix {
    /// Validate a matrix against the source and target it describes.
    pub fn new<T: PartialEq>(
        matrix: DistanceMatrix,
        source: &[T],
        target: &[T],
    ) -> Result<Self, InvariantError> {
        validate(&matrix, source, target)?;
        Ok(Self { inner: matrix })
    }

    /// Get the underlying matrix.
    pub fn inner(&self) -> &DistanceMatrix {
        &self.inner
    }

    /// Unwrap into the underlying matrix.
    pub fn into_inner(self) -> DistanceMatrix {
        self.inner
    }

    /// The verified distance between the full inputs.
    pub fn distance(&self) -> usize {
        self.inner.distance()
    }
}

/// Check every invariant, stopping at the first violation.
pub fn validate<T: PartialEq>(
    matrix: &DistanceMatrix,
    source: &[T],
    target: &[T],
) -> Result<(), InvariantError> {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    if rows != source.len() + 1 || cols != target.len() + 1 {
        return Err(InvariantError::DimensionMismatch {
            rows,
            cols,
            source_len: source.len(),
            target_len: target.len(),
        });
    }

    for j in 0..cols {
        let value = matrix[(0, j)];
        if value != j {
            return Err(InvariantError::BaseRowMismatch { col: j, value });
        }
    }
    for i in 0..rows {
        let value = matrix[(i, 0)];
        if value != i {
            return Err(InvariantError::BaseColumnMismatch { row: i, value });
        }
    }

    for i in 1..rows {
        for j in 1..cols {
            let value = matrix[(i, j)];
            if value > i.max(j) {
                return Err(InvariantError::CellAboveUpperBound {
                    row: i,
                    col: j,
                    value,
                });
            }
            if value < i.abs_diff(j) {
                return Err(InvariantError::CellBelowLengthDifference {
                    row: i,
                    col: j,
                    value,
                });
            }

            let diagonal = matrix[(i - 1, j - 1)];
            if value > diagonal + 1 {
                return Err(InvariantError::DiagonalStepTooLarge {
                    row: i,
                    col: j,
                    value,
                    diagonal,
                });
            }
            if value < diagonal && !transposition_applies(source, target, i, j) {
                return Err(InvariantError::DiagonalDecrease {
                    row: i,
                    col: j,
                    value,
                    diagonal,
                });
            }
        }
    }

    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dynamic-programming table, flattened into one buffer.
//!
//! Cell `(i, j)` holds the edit distance between the first `i` units of the
//! source and the first `j` units of the target. It lives at `i * cols + j`.
//! One allocation per computation, no row vectors, no aliasing.

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An `(n + 1) × (m + 1)` table of prefix distances.
///
/// Construction writes the base cases: row 0 is `0..=m` and column 0 is `0..=n`.
/// Interior cells start at zero and are filled by [`crate::osa_matrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Allocate the table for a source of length `n` and a target of length `m`.
    ///
    /// # Panics
    /// Panics if `(n + 1) * (m + 1)` overflows `usize`. Allocation failure for
    /// a table that fits the address space but not memory aborts as usual.
    pub fn new(n: usize, m: usize) -> Self {
        let size = n
            .checked_add(1)
            .zip(m.checked_add(1))
            .and_then(|(rows, cols)| rows.checked_mul(cols).map(|size| (rows, cols, size)));
        let Some((rows, cols, size)) = size else {
            panic!("distance matrix size overflows usize ({} x {})", n, m);
        };
        let mut cells = vec![0; size];

        for j in 0..cols {
            cells[j] = j;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }

        Self { rows, cols, cells }
    }

    /// Number of rows (`n + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`m + 1`).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice of `cols` cells.
    pub fn row(&self, i: usize) -> &[usize] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// The bottom-right cell: distance between the full source and target.
    #[inline]
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = usize;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &usize {
        debug_assert!(j < self.cols, "column {} out of bounds ({})", j, self.cols);
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut usize {
        debug_assert!(j < self.cols, "column {} out of bounds ({})", j, self.cols);
        &mut self.cells[i * self.cols + j]
    }
}

/// Wire shape checked before it becomes a [`DistanceMatrix`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = crate::InvariantError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        if raw.rows == 0 || raw.cols == 0 {
            return Err(crate::InvariantError::EmptyDimensions {
                rows: raw.rows,
                cols: raw.cols,
            });
        }
        let expected = raw.rows.checked_mul(raw.cols).unwrap_or(usize::MAX);
        if raw.cells.len() != expected {
            return Err(crate::InvariantError::CellCountMismatch {
                rows: raw.rows,
                cols: raw.cols,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

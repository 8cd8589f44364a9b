//! Properties of the whole table, cell by cell.

use damlev::{osa_matrix, VerifiedMatrix};
use proptest::prelude::*;

fn dense_bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..10)
}

proptest! {
    /// Every filled table passes the structural invariants.
    #[test]
    fn prop_filled_matrix_verifies(a in dense_bytes_strategy(), b in dense_bytes_strategy()) {
        let matrix = osa_matrix(&a, &b);
        let verified = VerifiedMatrix::new(matrix, &a, &b);
        prop_assert!(verified.is_ok(), "{:?}", verified.err());
    }

    /// Cell (i, j) is the distance between the i- and j-unit prefixes.
    #[test]
    fn prop_cells_are_prefix_distances(a in dense_bytes_strategy(), b in dense_bytes_strategy()) {
        let matrix = osa_matrix(&a, &b);
        for i in 0..=a.len() {
            for j in 0..=b.len() {
                prop_assert_eq!(matrix[(i, j)], damlev::osa_distance(&a[..i], &b[..j]));
            }
        }
    }

    /// Horizontally and vertically adjacent cells differ by at most one.
    #[test]
    fn prop_adjacent_cells_differ_by_at_most_one(
        a in dense_bytes_strategy(),
        b in dense_bytes_strategy()
    ) {
        let matrix = osa_matrix(&a, &b);
        for i in 0..matrix.rows() {
            for j in 1..matrix.cols() {
                prop_assert!(matrix[(i, j)].abs_diff(matrix[(i, j - 1)]) <= 1);
            }
        }
        for i in 1..matrix.rows() {
            for j in 0..matrix.cols() {
                prop_assert!(matrix[(i, j)].abs_diff(matrix[(i - 1, j)]) <= 1);
            }
        }
    }

    /// Swapping the inputs transposes the table.
    #[test]
    fn prop_swapped_inputs_transpose_matrix(
        a in dense_bytes_strategy(),
        b in dense_bytes_strategy()
    ) {
        let forward = osa_matrix(&a, &b);
        let backward = osa_matrix(&b, &a);
        prop_assert_eq!(forward.rows(), backward.cols());
        for i in 0..forward.rows() {
            for j in 0..forward.cols() {
                prop_assert_eq!(forward[(i, j)], backward[(j, i)]);
            }
        }
    }
}

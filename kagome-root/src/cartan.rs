//! Affine Cartan types of the untwisted A series
//!
//! `A_n^(1)` has Dynkin nodes `0..=n` arranged in a cycle, with node 0
//! the affine node and the classical subdiagram `A_n` on `1..=n`. All
//! marks and comarks equal 1, which makes the level of a weight the
//! plain sum of its fundamental-weight coefficients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The untwisted affine Cartan type `A_n^(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartanType {
    n: usize,
}

impl CartanType {
    /// Affine type `A_n^(1)` with classical rank `n >= 1`.
    pub fn a(n: usize) -> Self {
        assert!(n >= 1, "affine type A needs classical rank >= 1");
        Self { n }
    }

    /// Classical rank `n`.
    pub fn classical_rank(&self) -> usize {
        self.n
    }

    /// Number of Dynkin nodes, `n + 1`.
    pub fn num_nodes(&self) -> usize {
        self.n + 1
    }

    /// The affine index set `{0, 1, ..., n}`.
    pub fn index_set(&self) -> Vec<usize> {
        (0..=self.n).collect()
    }

    /// The classical index set `{1, ..., n}`.
    pub fn classical_index_set(&self) -> Vec<usize> {
        (1..=self.n).collect()
    }

    /// Marks `a_i` of the null root `delta = sum_i a_i alpha_i`.
    pub fn marks(&self) -> Vec<i64> {
        vec![1; self.n + 1]
    }

    /// Comarks `a_i^v`, the marks of the dual type. The canonical
    /// central element is `c = sum_i a_i^v alpha_i^v`.
    pub fn comarks(&self) -> Vec<i64> {
        vec![1; self.n + 1]
    }

    /// The dual Cartan type. `A_n^(1)` is self-dual.
    pub fn dual(&self) -> CartanType {
        *self
    }

    /// `A_n^(1)` is simply laced for `n >= 2`; `A_1^(1)` carries a
    /// doubled bond.
    pub fn is_simply_laced(&self) -> bool {
        self.n >= 2
    }

    /// Entry `a_ij = <alpha_j, alpha_i^v>` of the affine Cartan matrix:
    /// 2 on the diagonal, -1 between cyclically adjacent nodes, and -2
    /// on the off-diagonal for `A_1^(1)`.
    pub fn cartan_matrix_entry(&self, i: usize, j: usize) -> i64 {
        let m = self.num_nodes();
        assert!(i < m && j < m, "Dynkin node index out of range");
        if i == j {
            2
        } else if self.n == 1 {
            -2
        } else if (i + 1) % m == j || (j + 1) % m == i {
            -1
        } else {
            0
        }
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}~", self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_sets() {
        let ct = CartanType::a(2);
        assert_eq!(ct.index_set(), vec![0, 1, 2]);
        assert_eq!(ct.classical_index_set(), vec![1, 2]);
        assert_eq!(ct.num_nodes(), 3);
        assert_eq!(ct.classical_rank(), 2);
    }

    #[test]
    fn test_marks_and_comarks_all_one() {
        for n in 1..=6 {
            let ct = CartanType::a(n);
            assert!(ct.marks().iter().all(|&a| a == 1));
            assert!(ct.comarks().iter().all(|&a| a == 1));
        }
    }

    #[test]
    fn test_self_dual() {
        let ct = CartanType::a(4);
        assert_eq!(ct.dual(), ct);
    }

    #[test]
    fn test_simply_laced() {
        assert!(!CartanType::a(1).is_simply_laced());
        assert!(CartanType::a(2).is_simply_laced());
    }

    #[test]
    fn test_cartan_matrix_rows_sum_to_zero() {
        // Affine Cartan matrices are singular: each row pairs against
        // the null root.
        for n in 1..=5 {
            let ct = CartanType::a(n);
            for i in 0..ct.num_nodes() {
                let row: i64 = (0..ct.num_nodes())
                    .map(|j| ct.cartan_matrix_entry(i, j))
                    .sum();
                assert_eq!(row, 0, "row {i} of A{n}~");
            }
        }
    }

    #[test]
    fn test_cartan_matrix_a1() {
        let ct = CartanType::a(1);
        assert_eq!(ct.cartan_matrix_entry(0, 0), 2);
        assert_eq!(ct.cartan_matrix_entry(0, 1), -2);
        assert_eq!(ct.cartan_matrix_entry(1, 0), -2);
    }

    #[test]
    fn test_cartan_matrix_cycle_adjacency() {
        let ct = CartanType::a(3);
        assert_eq!(ct.cartan_matrix_entry(0, 3), -1);
        assert_eq!(ct.cartan_matrix_entry(3, 0), -1);
        assert_eq!(ct.cartan_matrix_entry(0, 2), 0);
        assert_eq!(ct.cartan_matrix_entry(1, 3), 0);
    }

    #[test]
    fn test_display_compact() {
        assert_eq!(CartanType::a(2).to_string(), "A2~");
        assert_eq!(CartanType::a(5).to_string(), "A5~");
    }

    #[test]
    #[should_panic(expected = "classical rank")]
    fn test_rank_zero_rejected() {
        CartanType::a(0);
    }
}

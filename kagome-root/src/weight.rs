// Copyright (c) 2026 the kagome authors. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Kagome-Proprietary
// See LICENSE in the repository root for full license terms.

//! Integral weights in the fundamental-weight basis
//!
//! A [`Weight`] stores the coefficients of `Lambda_0, ..., Lambda_n`,
//! the level-bearing span of the affine weight lattice (the `delta`
//! direction is never needed here: string statistics and path-model
//! target weights all live in this span). Since
//! `<Lambda_j, alpha_i^v> = delta_ij`, the coroot pairing reads off a
//! coefficient, and the level of a weight against `A_n^(1)` is the sum
//! of its coefficients weighted by the comarks.
//!
//! `Weight` is `Eq + Hash` so it can key the Epsilon/Phi lookup tables
//! of the path model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::cartan::CartanType;

/// An integral weight `sum_i coeffs[i] * Lambda_i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weight {
    coeffs: Vec<i64>,
}

impl Weight {
    pub fn new(coeffs: Vec<i64>) -> Self {
        assert!(!coeffs.is_empty(), "a weight needs at least one node");
        Self { coeffs }
    }

    /// The zero weight over `num_nodes` Dynkin nodes.
    pub fn zero(num_nodes: usize) -> Self {
        Self::new(vec![0; num_nodes])
    }

    /// The fundamental weight `Lambda_i`.
    pub fn fundamental(num_nodes: usize, i: usize) -> Self {
        assert!(i < num_nodes, "Dynkin node index out of range");
        let mut coeffs = vec![0; num_nodes];
        coeffs[i] = 1;
        Self { coeffs }
    }

    pub fn num_nodes(&self) -> usize {
        self.coeffs.len()
    }

    /// Coefficient of `Lambda_i`.
    pub fn coeff(&self, i: usize) -> i64 {
        self.coeffs[i]
    }

    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    /// Coroot pairing `<lambda, alpha_i^v>`.
    pub fn scalar(&self, i: usize) -> i64 {
        assert!(i < self.coeffs.len(), "Dynkin node index out of range");
        self.coeffs[i]
    }

    /// Level `<lambda, c> = sum_i a_i^v <lambda, alpha_i^v>`.
    pub fn level(&self, ct: &CartanType) -> i64 {
        assert_eq!(
            self.num_nodes(),
            ct.num_nodes(),
            "weight arity must match the Cartan type"
        );
        ct.comarks()
            .iter()
            .zip(&self.coeffs)
            .map(|(a, m)| a * m)
            .sum()
    }

    /// Whether every coefficient is nonnegative.
    pub fn is_dominant(&self) -> bool {
        self.coeffs.iter().all(|&m| m >= 0)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(mut self, rhs: Weight) -> Weight {
        self += rhs;
        self
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        assert_eq!(self.coeffs.len(), rhs.coeffs.len(), "weight arity mismatch");
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a += b;
        }
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(mut self, rhs: Weight) -> Weight {
        assert_eq!(self.coeffs.len(), rhs.coeffs.len(), "weight arity mismatch");
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a -= b;
        }
        self
    }
}

impl fmt::Display for Weight {
    /// Renders as a signed sum of fundamental weights, e.g.
    /// `L0 + 2*L2` or `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &m) in self.coeffs.iter().enumerate() {
            if m == 0 {
                continue;
            }
            if first {
                if m < 0 {
                    write!(f, "-")?;
                }
                first = false;
            } else if m < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let a = m.unsigned_abs();
            if a == 1 {
                write!(f, "L{i}")?;
            } else {
                write!(f, "{a}*L{i}")?;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fundamental_pairing() {
        let w = Weight::fundamental(3, 1);
        assert_eq!(w.scalar(0), 0);
        assert_eq!(w.scalar(1), 1);
        assert_eq!(w.scalar(2), 0);
    }

    #[test]
    fn test_level_counts_comarks() {
        let ct = CartanType::a(2);
        assert_eq!(Weight::fundamental(3, 0).level(&ct), 1);
        assert_eq!(Weight::new(vec![1, 0, 1]).level(&ct), 2);
        assert_eq!(Weight::new(vec![2, -1, 0]).level(&ct), 1);
        assert_eq!(Weight::zero(3).level(&ct), 0);
    }

    #[test]
    fn test_dominance() {
        assert!(Weight::new(vec![1, 0, 2]).is_dominant());
        assert!(!Weight::new(vec![2, -1, 0]).is_dominant());
    }

    #[test]
    fn test_arithmetic() {
        let a = Weight::new(vec![1, 0, 2]);
        let b = Weight::new(vec![0, 1, 1]);
        assert_eq!(a.clone() + b.clone(), Weight::new(vec![1, 1, 3]));
        assert_eq!(a - b, Weight::new(vec![1, -1, 1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::zero(3).to_string(), "0");
        assert_eq!(Weight::fundamental(3, 0).to_string(), "L0");
        assert_eq!(Weight::new(vec![1, 0, 2]).to_string(), "L0 + 2*L2");
        assert_eq!(Weight::new(vec![-1, 3, 0]).to_string(), "-L0 + 3*L1");
        assert_eq!(Weight::new(vec![0, 1, -1]).to_string(), "L1 - L2");
    }

    #[test]
    fn test_hash_key_roundtrip() {
        use std::collections::HashMap;
        let mut table = HashMap::new();
        table.insert(Weight::new(vec![1, 0, 0]), "ground");
        assert_eq!(table.get(&Weight::fundamental(3, 0)), Some(&"ground"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let w = Weight::new(vec![1, -2, 3]);
        let json = serde_json::to_string(&w).unwrap();
        let back: Weight = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}

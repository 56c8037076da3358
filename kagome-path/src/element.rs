// Copyright (c) 2026 the kagome authors. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Kagome-Proprietary
// See LICENSE in the repository root for full license terms.

//! Elements of the path model and their crystal operators
//!
//! A [`PathElement`] stores the finite head `[b_0, ..., b_{N-1}]` of a
//! semi-infinite path; the ground tail is implied by `Epsilon(b_{N-1})`
//! and re-enters the picture through two moves only:
//!
//! - `f_i` acting on the last stored factor first pulls the head of the
//!   tail into the list (the element whose `Phi` equals the last
//!   factor's `Epsilon`), then lowers the old last factor.
//! - `e_i` acting on the second-to-last factor drops the last factor
//!   when the raise makes it redundant.
//!
//! Within the stored factors the operators follow the signature rule of
//! the underlying tensor product. Both moves keep representatives
//! reduced, so equal paths are equal factor lists.

use std::fmt;

use kagome_crystal::crystal::{Crystal, PerfectCrystal};
use kagome_crystal::tensor::{unmatched_minus_positions, unmatched_plus_positions, FactorSigns};
use kagome_root::weight::Weight;

use crate::model::KyotoPathModel;

/// A path in `B(lambda)`, stored as its reduced list of factors.
pub struct PathElement<B: PerfectCrystal> {
    parent: KyotoPathModel<B>,
    factors: Vec<B::Element>,
}

impl<B: PerfectCrystal> Clone for PathElement<B> {
    fn clone(&self) -> Self {
        Self {
            parent: self.parent.clone(),
            factors: self.factors.clone(),
        }
    }
}

impl<B: PerfectCrystal> PathElement<B> {
    pub(crate) fn new(parent: KyotoPathModel<B>, factors: Vec<B::Element>) -> Self {
        debug_assert!(!factors.is_empty(), "a path keeps at least one factor");
        let element = Self { parent, factors };
        debug_assert!(element.is_reduced(), "operators keep representatives reduced");
        element
    }

    pub fn parent(&self) -> &KyotoPathModel<B> {
        &self.parent
    }

    /// Stored factors, ground tail excluded.
    pub fn factors(&self) -> &[B::Element] {
        &self.factors
    }

    /// Number of stored factors, always at least one: the generator
    /// starts with one and contraction never drops the last factor.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether no shorter factor list describes the same path. The last
    /// factor is redundant exactly when it is the head of the ground
    /// tail of the list before it.
    pub fn is_reduced(&self) -> bool {
        let n = self.factors.len();
        if n < 2 {
            return true;
        }
        let last = self.parent.crystal_at(n - 1).phi_weight(&self.factors[n - 1]);
        let before = self.parent.crystal_at(n - 2).epsilon_weight(&self.factors[n - 2]);
        last != before
    }

    fn signs(&self, i: usize) -> Vec<FactorSigns> {
        self.factors
            .iter()
            .enumerate()
            .map(|(k, b)| {
                let crystal = self.parent.crystal_at(k);
                FactorSigns {
                    minus: crystal.phi(b, i),
                    plus: crystal.epsilon(b, i),
                }
            })
            .collect()
    }

    /// Raising operator `e_i`.
    pub fn e(&self, i: usize) -> Option<Self> {
        let positions = unmatched_plus_positions(&self.signs(i));
        let k = *positions.first()?;
        if k + 1 == self.factors.len() {
            // Raising the last factor would rewrite the ground tail;
            // on the full semi-infinite path this `+` is matched.
            return None;
        }
        let crystal = self.parent.crystal_at(k);
        let raised = match crystal.e(&self.factors[k], i) {
            Some(b) => b,
            None => unreachable!("a surviving + at a factor means epsilon_i >= 1 there"),
        };
        let mut factors = self.factors.clone();
        if k + 2 == factors.len()
            && crystal.epsilon_weight(&raised)
                == self.parent.crystal_at(k + 1).phi_weight(&factors[k + 1])
        {
            factors.pop();
        }
        factors[k] = raised;
        Some(Self::new(self.parent.clone(), factors))
    }

    /// Lowering operator `f_i`.
    pub fn f(&self, i: usize) -> Option<Self> {
        let positions = unmatched_minus_positions(&self.signs(i));
        let k = *positions.last()?;
        let crystal = self.parent.crystal_at(k);
        let mut factors = self.factors.clone();
        if k + 1 == factors.len() {
            // Lowering the last factor steps into the ground tail;
            // pull the tail's head in before acting.
            let eps = crystal.epsilon_weight(&factors[k]);
            let head = match self.parent.head_element(k + 1, &eps) {
                Some(b) => b.clone(),
                None => unreachable!("cycle closure is checked at construction"),
            };
            factors.push(head);
        }
        factors[k] = match crystal.f(&factors[k], i) {
            Some(b) => b,
            None => unreachable!("a surviving - at a factor means phi_i >= 1 there"),
        };
        Some(Self::new(self.parent.clone(), factors))
    }

    /// Apply `e_i` for each color in `colors`, left to right.
    pub fn e_string(&self, colors: &[usize]) -> Option<Self> {
        let mut cur = self.clone();
        for &i in colors {
            cur = cur.e(i)?;
        }
        Some(cur)
    }

    /// Apply `f_i` for each color in `colors`, left to right.
    pub fn f_string(&self, colors: &[usize]) -> Option<Self> {
        let mut cur = self.clone();
        for &i in colors {
            cur = cur.f(i)?;
        }
        Some(cur)
    }

    /// Number of times `e_i` applies.
    pub fn epsilon(&self, i: usize) -> i64 {
        let mut count = 0;
        let mut cur = self.e(i);
        while let Some(b) = cur {
            count += 1;
            cur = b.e(i);
        }
        count
    }

    /// Number of times `f_i` applies.
    pub fn phi(&self, i: usize) -> i64 {
        let mut count = 0;
        let mut cur = self.f(i);
        while let Some(b) = cur {
            count += 1;
            cur = b.f(i);
        }
        count
    }

    /// Weight of the path, ground tail included: the tail contributes
    /// `Epsilon` of the last stored factor.
    pub fn weight(&self) -> Weight {
        let last = self.factors.len() - 1;
        let mut weight = self
            .parent
            .crystal_at(last)
            .epsilon_weight(&self.factors[last]);
        for (k, b) in self.factors.iter().enumerate() {
            weight += self.parent.crystal_at(k).weight(b);
        }
        weight
    }
}

impl<B: PerfectCrystal> PartialEq for PathElement<B> {
    fn eq(&self, other: &Self) -> bool {
        self.parent.ptr_eq(&other.parent) && self.factors == other.factors
    }
}

impl<B: PerfectCrystal> Eq for PathElement<B> {}

impl<B: PerfectCrystal> fmt::Debug for PathElement<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.factors).finish()
    }
}

impl<B: PerfectCrystal> fmt::Display for PathElement<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, b) in self.factors.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{b}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use kagome_crystal::kirillov_reshetikhin::KirillovReshetikhinCrystal;
    use kagome_root::cartan::CartanType;

    fn model() -> KyotoPathModel<KirillovReshetikhinCrystal> {
        let b = Arc::new(KirillovReshetikhinCrystal::column(CartanType::a(2), 1).unwrap());
        KyotoPathModel::single(b, Weight::fundamental(3, 0)).unwrap()
    }

    #[test]
    fn test_generator_admits_no_raise() {
        let mg = model().module_generator();
        for i in 0..3 {
            assert_eq!(mg.e(i), None);
            assert_eq!(mg.epsilon(i), 0);
        }
    }

    #[test]
    fn test_lowering_extends_and_raising_contracts() {
        let mg = model().module_generator();
        let down = mg.f(0).unwrap();
        assert_eq!(down.len(), 2);
        assert_eq!(down.to_string(), "[[[1]], [[2]]]");
        let back = down.e(0).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back, mg);
    }

    #[test]
    fn test_documented_walk() {
        let mg = model().module_generator();
        assert_eq!(mg.to_string(), "[[[3]]]");
        assert_eq!(mg.f(2), None);
        let low = mg.f_string(&[0, 1, 2, 2]).unwrap();
        assert_eq!(low.to_string(), "[[[3]], [[3]], [[1]]]");
        assert_eq!(low.e_string(&[2, 2, 1, 0]).unwrap(), mg);
    }

    #[test]
    fn test_contraction_keeps_at_least_one_factor() {
        let mg = model().module_generator();
        let mut cur = mg.f_string(&[0, 1, 2, 2]).unwrap();
        for i in [2, 2, 1, 0] {
            cur = cur.e(i).unwrap();
            assert!(cur.len() >= 1);
        }
        assert_eq!(cur.len(), 1);
    }

    #[test]
    fn test_weight_drops_by_the_acted_simple_root() {
        let model = model();
        let mg = model.module_generator();
        assert_eq!(mg.weight(), *model.weight());
        let down = mg.f(0).unwrap();
        let alpha_0: Vec<i64> = (0..3)
            .map(|j| model.cartan_type().cartan_matrix_entry(j, 0))
            .collect();
        assert_eq!(mg.weight() - down.weight(), Weight::new(alpha_0));
    }
}

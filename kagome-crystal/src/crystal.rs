//! Capability traits for crystals in the sense of Kashiwara
//!
//! A crystal is a finite set with partial raising/lowering operators
//! `e_i`/`f_i` per Dynkin node and string statistics `epsilon_i`/`phi_i`
//! counting how far each operator iterates. The path model consumes
//! crystals only through these traits, so any structure that can answer
//! the five questions below plugs in.

use std::fmt;
use std::hash::Hash;

use kagome_root::cartan::CartanType;
use kagome_root::weight::Weight;

/// A finite crystal for an affine Cartan type.
pub trait Crystal: Send + Sync {
    /// Element representation. Plain data: all structure lives on the
    /// crystal, so elements from different crystals can share one type.
    type Element: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync;

    fn cartan_type(&self) -> &CartanType;

    /// Every element, in enumeration order.
    fn elements(&self) -> &[Self::Element];

    /// Raising operator `e_i`; `None` at the top of the i-string.
    fn e(&self, b: &Self::Element, i: usize) -> Option<Self::Element>;

    /// Lowering operator `f_i`; `None` at the bottom of the i-string.
    fn f(&self, b: &Self::Element, i: usize) -> Option<Self::Element>;

    /// `epsilon_i(b)`: the number of times `e_i` applies to `b`.
    ///
    /// Default counts by iteration; implementations with closed-form
    /// statistics should override.
    fn epsilon(&self, b: &Self::Element, i: usize) -> i64 {
        let mut count = 0;
        let mut cur = self.e(b, i);
        while let Some(next) = cur {
            count += 1;
            cur = self.e(&next, i);
        }
        count
    }

    /// `phi_i(b)`: the number of times `f_i` applies to `b`.
    fn phi(&self, b: &Self::Element, i: usize) -> i64 {
        let mut count = 0;
        let mut cur = self.f(b, i);
        while let Some(next) = cur {
            count += 1;
            cur = self.f(&next, i);
        }
        count
    }

    /// `Epsilon(b) = sum_i epsilon_i(b) Lambda_i`.
    fn epsilon_weight(&self, b: &Self::Element) -> Weight {
        let nodes = self.cartan_type().num_nodes();
        Weight::new((0..nodes).map(|i| self.epsilon(b, i)).collect())
    }

    /// `Phi(b) = sum_i phi_i(b) Lambda_i`.
    fn phi_weight(&self, b: &Self::Element) -> Weight {
        let nodes = self.cartan_type().num_nodes();
        Weight::new((0..nodes).map(|i| self.phi(b, i)).collect())
    }

    /// `wt(b) = Phi(b) - Epsilon(b)`, the weight of `b` restricted to
    /// the fundamental-weight span.
    fn weight(&self, b: &Self::Element) -> Weight {
        self.phi_weight(b) - self.epsilon_weight(b)
    }
}

/// A perfect crystal of some level `l`.
///
/// Perfectness is what makes the path model's lookup tables well
/// defined: on the minimal elements (those with `Epsilon` of level `l`)
/// both `Epsilon` and `Phi` restrict to bijections onto the level-`l`
/// dominant weights.
pub trait PerfectCrystal: Crystal {
    /// The level `l`.
    fn level(&self) -> i64;

    /// Whether the crystal actually satisfies the perfectness axioms.
    /// Consumers check this before trusting `level`.
    fn is_perfect(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single i=1 string of fixed length over `A_1^(1)`; node 0 acts
    /// nowhere. Only exercises the default statistics.
    struct Chain {
        ct: CartanType,
        elements: Vec<u8>,
    }

    impl Chain {
        fn new(len: u8) -> Self {
            Self {
                ct: CartanType::a(1),
                elements: (0..len).collect(),
            }
        }
    }

    impl Crystal for Chain {
        type Element = u8;

        fn cartan_type(&self) -> &CartanType {
            &self.ct
        }

        fn elements(&self) -> &[u8] {
            &self.elements
        }

        fn e(&self, b: &u8, i: usize) -> Option<u8> {
            if i == 1 && *b > 0 {
                Some(b - 1)
            } else {
                None
            }
        }

        fn f(&self, b: &u8, i: usize) -> Option<u8> {
            if i == 1 && (*b as usize) + 1 < self.elements.len() {
                Some(b + 1)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_default_statistics_count_iterations() {
        let chain = Chain::new(4);
        assert_eq!(chain.epsilon(&0, 1), 0);
        assert_eq!(chain.phi(&0, 1), 3);
        assert_eq!(chain.epsilon(&2, 1), 2);
        assert_eq!(chain.phi(&2, 1), 1);
        assert_eq!(chain.epsilon(&2, 0), 0);
    }

    #[test]
    fn test_weight_maps() {
        let chain = Chain::new(3);
        assert_eq!(chain.epsilon_weight(&1), Weight::new(vec![0, 1]));
        assert_eq!(chain.phi_weight(&1), Weight::new(vec![0, 1]));
        assert_eq!(chain.weight(&0), Weight::new(vec![0, 2]));
        assert_eq!(chain.weight(&2), Weight::new(vec![0, -2]));
    }
}

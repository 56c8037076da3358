// Copyright (c) 2026 the kagome authors. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Kagome-Proprietary
// See LICENSE in the repository root for full license terms.

//! The Kyoto path model parent
//!
//! Fix a cycle `B_0, B_1, ..., B_{L-1}` of perfect crystals of one
//! level `l` and a level-`l` weight `lambda`. The path model realizes
//! the highest weight crystal `B(lambda)` as finite paths
//! `b_0 (x) b_1 (x) ... (x) b_{N-1}` with `b_k` drawn round-robin from
//! the cycle; the infinitely many remaining factors form the ground
//! path of `B(mu)` for `mu = Epsilon(b_{N-1})` and are never stored.
//! The highest weight element is the single factor with
//! `Phi(b) = lambda`.
//!
//! The parent owns two lookup tables per cycle position, keyed by
//! `Epsilon` and by `Phi` over the minimal elements, those whose
//! statistics sit at the crystal's own level. Every weight the path
//! operators ever look up is the statistic of a minimal element, and on
//! the minimal elements perfectness promises one element per level-`l`
//! dominant weight. That promise is verified here at construction
//! together with the level conditions, so the lowering operator can
//! extend paths by table lookup alone.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use kagome_crystal::crystal::{Crystal, PerfectCrystal};
use kagome_root::cartan::CartanType;
use kagome_root::weight::Weight;

use crate::element::PathElement;
use crate::error::{PathModelError, Statistic};

struct ModelInner<B: PerfectCrystal> {
    cartan_type: CartanType,
    crystals: Vec<Arc<B>>,
    weight: Weight,
    level: i64,
    epsilon_dicts: Vec<HashMap<Weight, B::Element>>,
    phi_dicts: Vec<HashMap<Weight, B::Element>>,
}

/// Validated parent for the path realization of `B(lambda)`.
///
/// A cheap-to-clone handle: clones share one immutable parent, and
/// elements compare parents by handle identity.
pub struct KyotoPathModel<B: PerfectCrystal> {
    inner: Arc<ModelInner<B>>,
}

impl<B: PerfectCrystal> Clone for KyotoPathModel<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: PerfectCrystal> KyotoPathModel<B> {
    /// Validate the crystal cycle against `weight` and build the lookup
    /// tables.
    pub fn new(crystals: Vec<Arc<B>>, weight: Weight) -> Result<Self, PathModelError> {
        let first = crystals.first().ok_or(PathModelError::EmptyCycle)?;
        let cartan_type = *first.cartan_type();
        let level = first.level();
        assert!(
            crystals.iter().all(|c| *c.cartan_type() == cartan_type),
            "crystals in a path model must share one Cartan type"
        );

        for (position, crystal) in crystals.iter().enumerate() {
            if !crystal.is_perfect() {
                return Err(PathModelError::NotPerfect { position });
            }
            let found = crystal.level();
            if found != level {
                return Err(PathModelError::LevelMismatch {
                    position,
                    found,
                    expected: level,
                });
            }
        }

        if weight.level(&cartan_type) != level {
            return Err(PathModelError::WeightNotInLevelCone { weight, level });
        }

        let mut epsilon_dicts = Vec::with_capacity(crystals.len());
        let mut phi_dicts = Vec::with_capacity(crystals.len());
        for (position, crystal) in crystals.iter().enumerate() {
            epsilon_dicts.push(keyed_by(crystal.as_ref(), position, Statistic::Epsilon)?);
            phi_dicts.push(keyed_by(crystal.as_ref(), position, Statistic::Phi)?);
        }

        // The Epsilon of any minimal element must resolve in the next
        // crystal of the cycle; extension during lowering relies on
        // this lookup. Only minimal elements ever sit at the end of a
        // path, so higher-level Epsilon values are never queried.
        for (position, crystal) in crystals.iter().enumerate() {
            let next = (position + 1) % crystals.len();
            for b in crystal.elements() {
                let eps = crystal.epsilon_weight(b);
                if eps.level(&cartan_type) != level {
                    continue;
                }
                if !phi_dicts[next].contains_key(&eps) {
                    return Err(PathModelError::NoMatchingElement {
                        position: next,
                        statistic: Statistic::Phi,
                        weight: eps,
                    });
                }
            }
        }

        if !phi_dicts[0].contains_key(&weight) {
            return Err(PathModelError::NoMatchingElement {
                position: 0,
                statistic: Statistic::Phi,
                weight,
            });
        }

        debug!(
            cycle = crystals.len(),
            level,
            keys = phi_dicts.iter().map(HashMap::len).sum::<usize>(),
            "built path model lookup tables"
        );

        Ok(Self {
            inner: Arc::new(ModelInner {
                cartan_type,
                crystals,
                weight,
                level,
                epsilon_dicts,
                phi_dicts,
            }),
        })
    }

    /// Model over a cycle of length one.
    pub fn single(crystal: Arc<B>, weight: Weight) -> Result<Self, PathModelError> {
        Self::new(vec![crystal], weight)
    }

    pub fn cartan_type(&self) -> &CartanType {
        &self.inner.cartan_type
    }

    pub fn index_set(&self) -> Vec<usize> {
        self.inner.cartan_type.index_set()
    }

    /// The highest weight `lambda`.
    pub fn weight(&self) -> &Weight {
        &self.inner.weight
    }

    pub fn level(&self) -> i64 {
        self.inner.level
    }

    pub fn crystals(&self) -> &[Arc<B>] {
        &self.inner.crystals
    }

    pub fn cycle_len(&self) -> usize {
        self.inner.crystals.len()
    }

    /// Crystal supplying factor `k` of a path (round-robin).
    pub fn crystal_at(&self, k: usize) -> &B {
        &self.inner.crystals[k % self.inner.crystals.len()]
    }

    /// Element of the `k`-th cycle crystal whose `Phi` is `w`: the
    /// factor that materializes when a path extends at position `k`.
    /// Only level-`l` dominant weights are keyed.
    pub fn head_element(&self, k: usize, w: &Weight) -> Option<&B::Element> {
        self.inner.phi_dicts[k % self.inner.phi_dicts.len()].get(w)
    }

    /// Element of the `k`-th cycle crystal whose `Epsilon` is `w`: the
    /// stand-in for the truncated ground tail at `w`. Only level-`l`
    /// dominant weights are keyed.
    pub fn tail_element(&self, k: usize, w: &Weight) -> Option<&B::Element> {
        self.inner.epsilon_dicts[k % self.inner.epsilon_dicts.len()].get(w)
    }

    /// The highest weight path, a single factor with `Phi = lambda`.
    pub fn module_generator(&self) -> PathElement<B> {
        let head = match self.inner.phi_dicts[0].get(&self.inner.weight) {
            Some(b) => b.clone(),
            None => unreachable!("generator existence is checked at construction"),
        };
        PathElement::new(self.clone(), vec![head])
    }

    /// All module generators; a path realization has exactly one.
    pub fn module_generators(&self) -> Vec<PathElement<B>> {
        vec![self.module_generator()]
    }

    /// Whether two handles share one underlying parent.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Index a crystal's minimal elements by one of the two statistics.
///
/// Elements whose statistic exceeds the crystal's level are skipped;
/// their keys can never be queried. Two minimal elements sharing a key
/// disprove perfectness, so the collision is an input error.
fn keyed_by<B: PerfectCrystal>(
    crystal: &B,
    position: usize,
    statistic: Statistic,
) -> Result<HashMap<Weight, B::Element>, PathModelError> {
    let cartan_type = crystal.cartan_type();
    let level = crystal.level();
    let mut table = HashMap::new();
    for b in crystal.elements() {
        let key = match statistic {
            Statistic::Epsilon => crystal.epsilon_weight(b),
            Statistic::Phi => crystal.phi_weight(b),
        };
        if key.level(cartan_type) != level {
            continue;
        }
        if table.insert(key.clone(), b.clone()).is_some() {
            return Err(PathModelError::NoMatchingElement {
                position,
                statistic,
                weight: key,
            });
        }
    }
    Ok(table)
}

impl<B: PerfectCrystal> fmt::Debug for KyotoPathModel<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KyotoPathModel")
            .field("weight", &self.inner.weight)
            .field("level", &self.inner.level)
            .field("cycle_len", &self.inner.crystals.len())
            .finish_non_exhaustive()
    }
}

impl<B: PerfectCrystal + fmt::Display> fmt::Display for KyotoPathModel<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kyoto path realization of B({}) using [", self.inner.weight)?;
        for (k, crystal) in self.inner.crystals.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{crystal}")?;
        }
        write!(f, "]")
    }
}

// Copyright (c) 2026 the kagome authors. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Kagome-Proprietary
// See LICENSE in the repository root for full license terms.

//! Kirillov-Reshetikhin crystals `B^{r,s}` of type `A_n^(1)`
//!
//! Two families are realized, both perfect of level `s`:
//! - single columns `B^{r,1}`: strictly increasing r-element columns
//!   over the alphabet `1..=n+1`, the classical crystal of the r-th
//!   fundamental representation
//! - single rows `B^{1,s}`: weakly increasing s-letter rows, the
//!   classical crystal of the s-th symmetric power
//!
//! Classical arrows follow the usual tableau rule on the entries. The
//! affine arrows at node 0 come from conjugating node 1 by the
//! promotion operator, which on these shapes is the cyclic entry shift
//! `x -> x + 1 (mod n+1)` followed by re-sorting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use kagome_root::cartan::CartanType;

use crate::crystal::{Crystal, PerfectCrystal};

/// Shape of a supported KR crystal: one column or one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KrShape {
    Column,
    Row,
}

/// A one-column or one-row tableau with entries in `1..=n+1`, kept
/// sorted (strictly for columns, weakly for rows).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KrTableau {
    shape: KrShape,
    entries: Vec<u8>,
}

impl KrTableau {
    /// A column tableau from strictly increasing entries.
    pub fn column(entries: Vec<u8>) -> Self {
        assert!(!entries.is_empty(), "a tableau needs at least one entry");
        assert!(entries[0] >= 1, "tableau entries start at 1");
        assert!(
            entries.windows(2).all(|w| w[0] < w[1]),
            "column entries must strictly increase"
        );
        Self {
            shape: KrShape::Column,
            entries,
        }
    }

    /// A row tableau from weakly increasing entries.
    pub fn row(entries: Vec<u8>) -> Self {
        assert!(!entries.is_empty(), "a tableau needs at least one entry");
        assert!(entries[0] >= 1, "tableau entries start at 1");
        assert!(
            entries.windows(2).all(|w| w[0] <= w[1]),
            "row entries must weakly increase"
        );
        Self {
            shape: KrShape::Row,
            entries,
        }
    }

    pub fn shape(&self) -> KrShape {
        self.shape
    }

    pub fn entries(&self) -> &[u8] {
        &self.entries
    }

    fn contains(&self, x: u8) -> bool {
        self.entries.contains(&x)
    }

    fn count(&self, x: u8) -> i64 {
        self.entries.iter().filter(|&&y| y == x).count() as i64
    }
}

impl fmt::Display for KrTableau {
    /// Renders as the list of tableau rows: a column one entry per row
    /// (`[[1], [3]]`), a row as a single list (`[[1, 3]]`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            KrShape::Column => {
                write!(f, "[")?;
                for (k, x) in self.entries.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[{x}]")?;
                }
                write!(f, "]")
            }
            KrShape::Row => {
                write!(f, "[[")?;
                for (k, x) in self.entries.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "]]")
            }
        }
    }
}

/// Requested a `B^{r,s}` outside the realized single-column/single-row
/// families.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("B^{{{r},{s}}} is not realized for A{rank}~: need 1 <= r <= {rank} and r = 1 or s = 1")]
pub struct UnsupportedShape {
    pub r: usize,
    pub s: usize,
    pub rank: usize,
}

/// The Kirillov-Reshetikhin crystal `B^{r,s}` of type `A_n^(1)`,
/// with its elements enumerated up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KirillovReshetikhinCrystal {
    ct: CartanType,
    r: usize,
    s: usize,
    elements: Vec<KrTableau>,
}

impl KirillovReshetikhinCrystal {
    /// Build `B^{r,s}`. Supported shapes: columns `1 <= r <= n` with
    /// `s = 1`, and rows `r = 1` with any `s >= 1`.
    pub fn new(ct: CartanType, r: usize, s: usize) -> Result<Self, UnsupportedShape> {
        let n = ct.classical_rank();
        assert!(n + 1 <= u8::MAX as usize, "alphabet must fit in u8");
        if r < 1 || r > n || s < 1 || (r != 1 && s != 1) {
            return Err(UnsupportedShape { r, s, rank: n });
        }
        let alphabet = (n + 1) as u8;
        let elements = if s == 1 {
            sorted_words(alphabet, r, true)
                .into_iter()
                .map(|entries| KrTableau {
                    shape: KrShape::Column,
                    entries,
                })
                .collect()
        } else {
            sorted_words(alphabet, s, false)
                .into_iter()
                .map(|entries| KrTableau {
                    shape: KrShape::Row,
                    entries,
                })
                .collect()
        };
        Ok(Self { ct, r, s, elements })
    }

    /// The single-column crystal `B^{r,1}`.
    pub fn column(ct: CartanType, r: usize) -> Result<Self, UnsupportedShape> {
        Self::new(ct, r, 1)
    }

    /// The single-row crystal `B^{1,s}`.
    pub fn row(ct: CartanType, s: usize) -> Result<Self, UnsupportedShape> {
        Self::new(ct, 1, s)
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn s(&self) -> usize {
        self.s
    }

    /// Promotion: shift every entry cyclically by one and re-sort.
    pub fn promote(&self, b: &KrTableau) -> KrTableau {
        let m = self.ct.num_nodes() as u8;
        let mut entries: Vec<u8> = b.entries.iter().map(|&x| x % m + 1).collect();
        entries.sort_unstable();
        KrTableau {
            shape: b.shape,
            entries,
        }
    }

    /// Inverse promotion.
    pub fn demote(&self, b: &KrTableau) -> KrTableau {
        let m = self.ct.num_nodes() as u16;
        let mut entries: Vec<u8> = b
            .entries
            .iter()
            .map(|&x| ((x as u16 + m - 2) % m + 1) as u8)
            .collect();
        entries.sort_unstable();
        KrTableau {
            shape: b.shape,
            entries,
        }
    }

    fn check_color(&self, i: usize) {
        assert!(i < self.ct.num_nodes(), "color {i} out of range for {}", self.ct);
    }

    /// Classical `e_i` (`1 <= i <= n`): turn one `i+1` into `i`.
    fn classical_e(&self, b: &KrTableau, i: u8) -> Option<KrTableau> {
        let defined = match b.shape {
            KrShape::Column => b.contains(i + 1) && !b.contains(i),
            KrShape::Row => b.count(i + 1) > 0,
        };
        if !defined {
            return None;
        }
        Some(replace_entry(b, i + 1, i))
    }

    /// Classical `f_i` (`1 <= i <= n`): turn one `i` into `i+1`.
    fn classical_f(&self, b: &KrTableau, i: u8) -> Option<KrTableau> {
        let defined = match b.shape {
            KrShape::Column => b.contains(i) && !b.contains(i + 1),
            KrShape::Row => b.count(i) > 0,
        };
        if !defined {
            return None;
        }
        Some(replace_entry(b, i, i + 1))
    }

    fn classical_epsilon(&self, b: &KrTableau, i: u8) -> i64 {
        match b.shape {
            KrShape::Column => (b.contains(i + 1) && !b.contains(i)) as i64,
            KrShape::Row => b.count(i + 1),
        }
    }

    fn classical_phi(&self, b: &KrTableau, i: u8) -> i64 {
        match b.shape {
            KrShape::Column => (b.contains(i) && !b.contains(i + 1)) as i64,
            KrShape::Row => b.count(i),
        }
    }
}

/// Swap one occurrence of `from` for `to`, restoring sort order.
fn replace_entry(b: &KrTableau, from: u8, to: u8) -> KrTableau {
    let mut entries = b.entries.clone();
    let pos = match entries.iter().position(|&x| x == from) {
        Some(pos) => pos,
        None => unreachable!("caller checked that {from} occurs"),
    };
    entries[pos] = to;
    entries.sort_unstable();
    KrTableau {
        shape: b.shape,
        entries,
    }
}

/// All sorted words of the given length over `1..=alphabet`, strictly
/// increasing for columns, weakly for rows.
fn sorted_words(alphabet: u8, len: usize, strict: bool) -> Vec<Vec<u8>> {
    fn extend(
        out: &mut Vec<Vec<u8>>,
        cur: &mut Vec<u8>,
        from: u16,
        alphabet: u16,
        len: usize,
        strict: bool,
    ) {
        if cur.len() == len {
            out.push(cur.clone());
            return;
        }
        for x in from..=alphabet {
            cur.push(x as u8);
            extend(out, cur, if strict { x + 1 } else { x }, alphabet, len, strict);
            cur.pop();
        }
    }
    let mut out = Vec::new();
    let mut cur = Vec::with_capacity(len);
    extend(&mut out, &mut cur, 1, alphabet as u16, len, strict);
    out
}

impl Crystal for KirillovReshetikhinCrystal {
    type Element = KrTableau;

    fn cartan_type(&self) -> &CartanType {
        &self.ct
    }

    fn elements(&self) -> &[KrTableau] {
        &self.elements
    }

    fn e(&self, b: &KrTableau, i: usize) -> Option<KrTableau> {
        self.check_color(i);
        if i == 0 {
            let raised = self.classical_e(&self.promote(b), 1)?;
            Some(self.demote(&raised))
        } else {
            self.classical_e(b, i as u8)
        }
    }

    fn f(&self, b: &KrTableau, i: usize) -> Option<KrTableau> {
        self.check_color(i);
        if i == 0 {
            let lowered = self.classical_f(&self.promote(b), 1)?;
            Some(self.demote(&lowered))
        } else {
            self.classical_f(b, i as u8)
        }
    }

    fn epsilon(&self, b: &KrTableau, i: usize) -> i64 {
        self.check_color(i);
        if i == 0 {
            self.classical_epsilon(&self.promote(b), 1)
        } else {
            self.classical_epsilon(b, i as u8)
        }
    }

    fn phi(&self, b: &KrTableau, i: usize) -> i64 {
        self.check_color(i);
        if i == 0 {
            self.classical_phi(&self.promote(b), 1)
        } else {
            self.classical_phi(b, i as u8)
        }
    }
}

impl PerfectCrystal for KirillovReshetikhinCrystal {
    fn level(&self) -> i64 {
        self.s as i64
    }

    /// Every realized `B^{r,s}` of type A is perfect of level `s`.
    fn is_perfect(&self) -> bool {
        true
    }
}

// The element list is derived from (ct, r, s); identity ignores it.
impl PartialEq for KirillovReshetikhinCrystal {
    fn eq(&self, other: &Self) -> bool {
        self.ct == other.ct && self.r == other.r && self.s == other.s
    }
}

impl Eq for KirillovReshetikhinCrystal {}

impl Hash for KirillovReshetikhinCrystal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ct.hash(state);
        self.r.hash(state);
        self.s.hash(state);
    }
}

impl fmt::Display for KirillovReshetikhinCrystal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B^{{{},{}}}({})", self.r, self.s, self.ct)
    }
}

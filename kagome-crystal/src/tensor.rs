// Copyright (c) 2026 the kagome authors. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Kagome-Proprietary
// See LICENSE in the repository root for full license terms.

//! Signature rule for tensor products of crystals
//!
//! For a fixed color `i`, factor `j` of a tensor product contributes the
//! sign word `-^{phi_i(b_j)} +^{epsilon_i(b_j)}`. Reading factors left
//! to right and cancelling every `+` against the next surviving `-` to
//! its right leaves a word of the shape `-^a +^b`; `e_i` acts on the
//! factor holding the first surviving `+`, `f_i` on the factor holding
//! the last surviving `-`.
//!
//! The searches below run in one pass per direction with a running
//! count of open signs instead of materializing the word, and record
//! positions at factor granularity (a factor appears once no matter how
//! many of its signs survive). This is the convention in which the
//! first tensor factor is the one `f_i` reaches last.

/// Per-factor sign counts for one color: `minus = phi_i`, `plus = epsilon_i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorSigns {
    pub minus: i64,
    pub plus: i64,
}

/// Positions (ascending) of factors carrying at least one surviving `-`.
///
/// `open_plus` counts `+` signs not yet cancelled. A factor whose
/// minus count exceeds the open pluses keeps at least one `-`; its
/// leftover minuses can never cancel (only later pluses follow), so the
/// count resets to the factor's own pluses.
pub fn unmatched_minus_positions(signs: &[FactorSigns]) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut open_plus: i64 = 0;
    for (j, s) in signs.iter().enumerate() {
        if open_plus - s.minus < 0 {
            positions.push(j);
            open_plus = s.plus;
        } else {
            open_plus = open_plus - s.minus + s.plus;
        }
    }
    positions
}

/// Positions (ascending) of factors carrying at least one surviving `+`.
///
/// The dual of [`unmatched_minus_positions`]: scan the reversed
/// sequence with the sign roles swapped, then map positions back to
/// forward coordinates.
pub fn unmatched_plus_positions(signs: &[FactorSigns]) -> Vec<usize> {
    let n = signs.len();
    let mut reversed = Vec::new();
    let mut open_minus: i64 = 0;
    for (j, s) in signs.iter().rev().enumerate() {
        if open_minus - s.plus < 0 {
            reversed.push(j);
            open_minus = s.minus;
        } else {
            open_minus = open_minus - s.plus + s.minus;
        }
    }
    reversed.iter().rev().map(|j| n - 1 - j).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signs(pairs: &[(i64, i64)]) -> Vec<FactorSigns> {
        pairs
            .iter()
            .map(|&(minus, plus)| FactorSigns { minus, plus })
            .collect()
    }

    #[test]
    fn test_empty_word() {
        assert!(unmatched_minus_positions(&[]).is_empty());
        assert!(unmatched_plus_positions(&[]).is_empty());
    }

    #[test]
    fn test_single_factor() {
        let w = signs(&[(1, 0)]);
        assert_eq!(unmatched_minus_positions(&w), vec![0]);
        assert!(unmatched_plus_positions(&w).is_empty());

        let w = signs(&[(0, 1)]);
        assert!(unmatched_minus_positions(&w).is_empty());
        assert_eq!(unmatched_plus_positions(&w), vec![0]);
    }

    #[test]
    fn test_plus_before_minus_cancels() {
        // word: + -
        let w = signs(&[(0, 1), (1, 0)]);
        assert!(unmatched_minus_positions(&w).is_empty());
        assert!(unmatched_plus_positions(&w).is_empty());
    }

    #[test]
    fn test_minus_before_plus_survives() {
        // word: - +
        let w = signs(&[(1, 0), (0, 1)]);
        assert_eq!(unmatched_minus_positions(&w), vec![0]);
        assert_eq!(unmatched_plus_positions(&w), vec![1]);
    }

    #[test]
    fn test_leftover_minuses_stay_inert() {
        // word: - - + - : the lone + cancels the last -, the leading
        // two minuses survive but never absorb anything.
        let w = signs(&[(2, 1), (1, 0)]);
        assert_eq!(unmatched_minus_positions(&w), vec![0]);
        assert!(unmatched_plus_positions(&w).is_empty());
    }

    #[test]
    fn test_factor_granularity() {
        // Both factors keep a surviving minus; each is reported once.
        let w = signs(&[(1, 0), (2, 0)]);
        assert_eq!(unmatched_minus_positions(&w), vec![0, 1]);
    }

    #[test]
    fn test_mixed_run() {
        // word: (-)(-+)(+) = "- - + +": every plus sits right of every
        // minus, so nothing cancels.
        let w = signs(&[(1, 0), (1, 1), (0, 1)]);
        assert_eq!(unmatched_minus_positions(&w), vec![0, 1]);
        assert_eq!(unmatched_plus_positions(&w), vec![1, 2]);
    }

    #[test]
    fn test_reset_matches_word_expansion() {
        // word: (+)(--++)(-) = "+ - - + + -". The leading + cancels the
        // first - of factor 1; one + of factor 1 cancels the final -.
        // Survivors: one - and one +, both in factor 1.
        let w = signs(&[(0, 1), (2, 2), (1, 0)]);
        assert_eq!(unmatched_minus_positions(&w), vec![1]);
        assert_eq!(unmatched_plus_positions(&w), vec![1]);
    }
}

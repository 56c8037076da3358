//! Error types for path-model construction and table lookups

use std::fmt;
use thiserror::Error;

use kagome_root::weight::Weight;

/// Which statistic keys a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Epsilon,
    Phi,
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Epsilon => write!(f, "Epsilon"),
            Statistic::Phi => write!(f, "Phi"),
        }
    }
}

/// Rejections raised while validating a path model.
///
/// A raising or lowering operator coming back empty is not an error:
/// that is the ordinary end of an i-string and is typed as `Option`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathModelError {
    #[error("a path model needs at least one crystal")]
    EmptyCycle,

    #[error("crystal at position {position} is not perfect")]
    NotPerfect { position: usize },

    #[error("crystal at position {position} has level {found}, expected level {expected}")]
    LevelMismatch {
        position: usize,
        found: i64,
        expected: i64,
    },

    #[error("{weight} is not a level {level} weight")]
    WeightNotInLevelCone { weight: Weight, level: i64 },

    /// A lookup keyed by Epsilon or Phi resolved to no element, or to
    /// more than one. Construction aborts rather than guessing.
    #[error("crystal at position {position} has no unique element with {statistic} = {weight}")]
    NoMatchingElement {
        position: usize,
        statistic: Statistic,
        weight: Weight,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PathModelError::WeightNotInLevelCone {
            weight: Weight::new(vec![1, 1, 0]),
            level: 1,
        };
        assert_eq!(err.to_string(), "L0 + L1 is not a level 1 weight");

        let err = PathModelError::NoMatchingElement {
            position: 0,
            statistic: Statistic::Phi,
            weight: Weight::new(vec![2, -1, 0]),
        };
        assert_eq!(
            err.to_string(),
            "crystal at position 0 has no unique element with Phi = 2*L0 - L1"
        );
    }
}

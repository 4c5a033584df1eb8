//! Resolution outcomes.
//!
//! An outcome is a tagged variant: a draw carries the shared value, a win
//! carries the two cards and their score gap. Code branching on an outcome
//! must be exhaustive.

use crate::cards::{AttributeKey, Card};

/// Outcome of comparing the two contestants on one attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome<'a> {
    /// Both scores exactly equal.
    Draw {
        /// Attribute that was compared.
        attribute: AttributeKey,
        /// The shared score.
        value: f64,
    },
    /// Scores differ; the strictly larger one wins.
    Win {
        /// Attribute that was compared.
        attribute: AttributeKey,
        /// Card with the larger score.
        winner: &'a Card,
        /// Card with the smaller score.
        loser: &'a Card,
        /// Absolute score gap, always greater than zero.
        diff: f64,
    },
}

impl<'a> Outcome<'a> {
    /// Attribute this outcome was resolved on.
    #[must_use]
    pub fn attribute(&self) -> AttributeKey {
        match self {
            Outcome::Draw { attribute, .. } | Outcome::Win { attribute, .. } => *attribute,
        }
    }

    /// Check if the outcome is a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw { .. })
    }

    /// Score gap. `0.0` for a draw.
    #[must_use]
    pub fn diff(&self) -> f64 {
        match self {
            Outcome::Draw { .. } => 0.0,
            Outcome::Win { diff, .. } => *diff,
        }
    }

    /// Winning card, when there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&'a Card> {
        match self {
            Outcome::Draw { .. } => None,
            Outcome::Win { winner, .. } => Some(winner),
        }
    }

    /// Losing card, when there is one.
    #[must_use]
    pub fn loser(&self) -> Option<&'a Card> {
        match self {
            Outcome::Draw { .. } => None,
            Outcome::Win { loser, .. } => Some(loser),
        }
    }
}

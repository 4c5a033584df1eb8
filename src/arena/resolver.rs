//! Arena resolution: a pure function from decks and configuration to an
//! outcome.
//!
//! Any input may still be absent while resources load; absence yields an
//! undetermined result (`None`), never an error. Resolution mutates
//! nothing, persists nothing, and is deterministic.

use crate::cards::{Card, Deck};

use super::config::ArenaConfig;
use super::outcome::Outcome;

/// Look up the two contestants named by the configuration.
///
/// Requires all three inputs; while any is absent both sides are `None`.
/// Each side is then a linear scan of its own deck, so a configured id that
/// is missing from its deck yields `None` for that side only.
#[must_use]
pub fn contestants<'a>(
    deck_a: Option<&'a Deck>,
    deck_b: Option<&'a Deck>,
    config: Option<&ArenaConfig>,
) -> (Option<&'a Card>, Option<&'a Card>) {
    let (Some(deck_a), Some(deck_b), Some(config)) = (deck_a, deck_b, config) else {
        return (None, None);
    };

    (deck_a.find(&config.deck_a), deck_b.find(&config.deck_b))
}

/// Resolve the configured matchup.
///
/// `None` means undetermined: a resource not yet loaded, or a configured id
/// missing from its deck. Otherwise the configured attribute is compared:
/// exactly equal scores draw; any other pair wins to the strictly larger
/// side with `diff` the absolute gap.
#[must_use]
pub fn resolve<'a>(
    deck_a: Option<&'a Deck>,
    deck_b: Option<&'a Deck>,
    config: Option<&ArenaConfig>,
) -> Option<Outcome<'a>> {
    let attribute = config?.attribute;
    let (left, right) = contestants(deck_a, deck_b, config);
    let (left, right) = (left?, right?);

    let left_value = left.score(attribute);
    let right_value = right.score(attribute);

    if left_value == right_value {
        return Some(Outcome::Draw {
            attribute,
            value: left_value,
        });
    }

    let (winner, loser) = if left_value > right_value {
        (left, right)
    } else {
        (right, left)
    };

    Some(Outcome::Win {
        attribute,
        winner,
        loser,
        diff: (left_value - right_value).abs(),
    })
}

/// Label of the winning participant.
///
/// Matches the winning card id against the configured ids and picks the
/// corresponding participant label. Draws produce no label, and neither
/// does a winner matching neither configured id (impossible for outcomes
/// produced by [`resolve`], which only ever returns the looked-up cards).
#[must_use]
pub fn winner_label<'a>(outcome: &Outcome<'_>, config: &'a ArenaConfig) -> Option<&'a str> {
    let winner = outcome.winner()?;

    if winner.id == config.deck_a {
        Some(config.player_a_label())
    } else if winner.id == config.deck_b {
        Some(config.player_b_label())
    } else {
        None
    }
}

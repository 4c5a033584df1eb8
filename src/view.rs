//! Per-render page computations.
//!
//! Everything here is a pure function of one loaded resource snapshot,
//! recomputed whenever a resource changes identity. Nothing mutates its
//! inputs and nothing is cached across snapshots.

use crate::arena::{resolver, ArenaConfig, Outcome};
use crate::cards::{AttributeKey, Card, CardIndex};
use crate::history::{self, HistoryEntry};
use crate::resources::ArenaResources;

/// Clamp a score to the [0, 100] range used for bar rendering.
///
/// Rendering only; stored scores are never clamped.
#[must_use]
pub fn bar_width(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// The five stat bars of a card, in display order, clamped for rendering.
#[must_use]
pub fn stat_bars(card: &Card) -> [(AttributeKey, f64); 5] {
    AttributeKey::ALL.map(|key| (key, bar_width(card.score(key))))
}

/// The arena panel: contestants, labels, and the resolved outcome.
#[derive(Clone, Copy, Debug)]
pub struct ArenaView<'a> {
    /// The configuration the panel was computed from.
    pub config: &'a ArenaConfig,

    /// Contestant from deck A, when the configured id resolved.
    pub left: Option<&'a Card>,

    /// Contestant from deck B, when the configured id resolved.
    pub right: Option<&'a Card>,

    /// Label of the deck A participant.
    pub left_label: &'a str,

    /// Label of the deck B participant.
    pub right_label: &'a str,

    /// `None` while either contestant is undetermined.
    pub outcome: Option<Outcome<'a>>,
}

impl<'a> ArenaView<'a> {
    /// Label of the winning participant, when there is one.
    #[must_use]
    pub fn winner_label(&self) -> Option<&'a str> {
        self.outcome
            .as_ref()
            .and_then(|outcome| resolver::winner_label(outcome, self.config))
    }
}

/// Everything the page renders, computed in one pass.
#[derive(Clone, Debug)]
pub struct PageModel<'a> {
    /// The arena panel; `None` until a matchup is configured.
    pub arena: Option<ArenaView<'a>>,

    /// Id lookup across both decks, for history rendering.
    pub index: CardIndex<'a>,

    /// Past outcomes resolved against the index, in recorded order.
    pub history: Vec<HistoryEntry<'a>>,

    /// Advisory notices from resource loading.
    pub notices: &'a [String],
}

impl<'a> PageModel<'a> {
    /// Compute the page model for one render pass.
    #[must_use]
    pub fn compute(resources: &'a ArenaResources) -> Self {
        let deck_a = Some(&resources.deck_a);
        let deck_b = Some(&resources.deck_b);
        let config = resources.arena.as_ref();

        let index = CardIndex::build(deck_a, deck_b);
        let history = history::entries(&resources.winners, &index);

        let arena = config.map(|config| {
            let (left, right) = resolver::contestants(deck_a, deck_b, Some(config));

            ArenaView {
                config,
                left,
                right,
                left_label: config.player_a_label(),
                right_label: config.player_b_label(),
                outcome: resolver::resolve(deck_a, deck_b, Some(config)),
            }
        });

        Self {
            arena,
            index,
            history,
            notices: &resources.notices,
        }
    }
}

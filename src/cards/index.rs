//! Card index for history rendering.
//!
//! The `CardIndex` maps card ids to cards across both decks so past winner
//! records resolve in O(1). It is rebuilt whenever either deck changes
//! identity and plays no part in arena resolution itself.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};
use super::deck::Deck;

/// Id lookup map spanning both decks.
///
/// Deck A is inserted first and deck B second, so a deck B card wins when
/// both decks happen to share an id. Absent decks contribute nothing.
///
/// ## Example
///
/// ```
/// use card_arena::cards::{Card, CardIndex, Deck};
///
/// let deck_a = Deck::new(vec![Card::new("a-1", "Prof. A", "/a.png")]);
/// let deck_b = Deck::new(vec![Card::new("b-1", "Profa. B", "/b.png")]);
///
/// let index = CardIndex::build(Some(&deck_a), Some(&deck_b));
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.get(&"b-1".into()).unwrap().teacher, "Profa. B");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardIndex<'a> {
    cards: FxHashMap<&'a str, &'a Card>,
}

impl<'a> CardIndex<'a> {
    /// Build the index over two optionally loaded decks.
    #[must_use]
    pub fn build(deck_a: Option<&'a Deck>, deck_b: Option<&'a Deck>) -> Self {
        let mut cards = FxHashMap::default();

        for deck in [deck_a, deck_b].into_iter().flatten() {
            for card in deck {
                cards.insert(card.id.as_str(), card);
            }
        }

        Self { cards }
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&'a Card> {
        self.cards.get(id.as_str()).copied()
    }

    /// Check if an id is indexed.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id.as_str())
    }

    /// Number of indexed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all indexed cards.
    pub fn iter(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.cards.values().copied()
    }
}

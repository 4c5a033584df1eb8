//! Decks: ordered card sequences.
//!
//! A deck round-trips as a bare JSON array. Lookup by id is a linear scan
//! in insertion order; if two cards share an id the first match wins.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// An ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck(pub Vec<Card>);

impl Deck {
    /// Create a deck from a card list.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// First card whose id matches, scanning in insertion order.
    #[must_use]
    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.0.iter().find(|card| &card.id == id)
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// The cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Card records: static data loaded from deck resources.
//!
//! A `Card` is immutable once loaded. Instance state does not exist in this
//! system; a card is only ever looked up and displayed.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, Attributes};

/// Identifier of a card, unique within its deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A teacher card.
///
/// ## Example
///
/// ```
/// use card_arena::cards::{AttributeKey, Card};
///
/// let card = Card::new("a-prof-joao", "Prof. João", "/images/prof-joao.jpeg")
///     .with_nickname("O Didático")
///     .with_attr(AttributeKey::Carisma, 85.0);
///
/// assert_eq!(card.score(AttributeKey::Carisma), 85.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the card's deck.
    pub id: CardId,

    /// Display name of the teacher.
    pub teacher: String,

    /// Optional nickname shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Path or URL of the card image.
    pub image: String,

    /// The five scores.
    #[serde(default)]
    pub attributes: Attributes,

    /// Free-form notes, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Card {
    /// Create a new card with zeroed scores.
    pub fn new(
        id: impl Into<CardId>,
        teacher: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            teacher: teacher.into(),
            nickname: None,
            image: image.into(),
            attributes: Attributes::default(),
            notes: None,
        }
    }

    /// Set the nickname (builder pattern).
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set the notes (builder pattern).
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set one score (builder pattern).
    #[must_use]
    pub fn with_attr(mut self, key: AttributeKey, value: f64) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Score of this card for the given key.
    #[must_use]
    pub fn score(&self, key: AttributeKey) -> f64 {
        self.attributes.get(key)
    }
}

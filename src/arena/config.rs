//! Arena configuration: the currently contested matchup.
//!
//! Fully external data. It is read fresh on every page load, never mutated
//! by the application, and updated out of band by editing the arena
//! resource file.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeKey, CardId};

/// Fallback label for the deck A participant.
pub const DEFAULT_PLAYER_A: &str = "Jogador A";

/// Fallback label for the deck B participant.
pub const DEFAULT_PLAYER_B: &str = "Jogador B";

/// The configured matchup: one attribute, one card id per deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Round identifier, echoed into winner records.
    pub round: String,

    /// Attribute under contest.
    pub attribute: AttributeKey,

    /// Id of the contesting card in deck A.
    #[serde(rename = "deckA")]
    pub deck_a: CardId,

    /// Id of the contesting card in deck B.
    #[serde(rename = "deckB")]
    pub deck_b: CardId,

    /// Display name of the deck A participant.
    #[serde(rename = "playerAName", default, skip_serializing_if = "Option::is_none")]
    pub player_a_name: Option<String>,

    /// Display name of the deck B participant.
    #[serde(rename = "playerBName", default, skip_serializing_if = "Option::is_none")]
    pub player_b_name: Option<String>,
}

impl ArenaConfig {
    /// Create a configuration without participant names.
    pub fn new(
        round: impl Into<String>,
        attribute: AttributeKey,
        deck_a: impl Into<CardId>,
        deck_b: impl Into<CardId>,
    ) -> Self {
        Self {
            round: round.into(),
            attribute,
            deck_a: deck_a.into(),
            deck_b: deck_b.into(),
            player_a_name: None,
            player_b_name: None,
        }
    }

    /// Set both participant names (builder pattern).
    #[must_use]
    pub fn with_players(
        mut self,
        player_a: impl Into<String>,
        player_b: impl Into<String>,
    ) -> Self {
        self.player_a_name = Some(player_a.into());
        self.player_b_name = Some(player_b.into());
        self
    }

    /// Label for the deck A participant, falling back to [`DEFAULT_PLAYER_A`].
    #[must_use]
    pub fn player_a_label(&self) -> &str {
        self.player_a_name.as_deref().unwrap_or(DEFAULT_PLAYER_A)
    }

    /// Label for the deck B participant, falling back to [`DEFAULT_PLAYER_B`].
    #[must_use]
    pub fn player_b_label(&self) -> &str {
        self.player_b_name.as_deref().unwrap_or(DEFAULT_PLAYER_B)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_shape() {
        let config: ArenaConfig = serde_json::from_str(
            r#"{
                "round": "2025-10-01-1",
                "attribute": "carisma",
                "deckA": "a-prof-ricardo",
                "deckB": "b-profa-renata",
                "playerAName": "Ana",
                "playerBName": "Bruno"
            }"#,
        )
        .unwrap();

        assert_eq!(config.round, "2025-10-01-1");
        assert_eq!(config.attribute, AttributeKey::Carisma);
        assert_eq!(config.deck_a, CardId::new("a-prof-ricardo"));
        assert_eq!(config.player_b_label(), "Bruno");
    }

    #[test]
    fn test_labels_fall_back() {
        let config = ArenaConfig::new("r1", AttributeKey::Rigor, "a-1", "b-1");

        assert_eq!(config.player_a_label(), "Jogador A");
        assert_eq!(config.player_b_label(), "Jogador B");
    }

    #[test]
    fn test_with_players() {
        let config = ArenaConfig::new("r1", AttributeKey::Humor, "a-1", "b-1")
            .with_players("Ana", "Bruno");

        assert_eq!(config.player_a_label(), "Ana");
        assert_eq!(config.player_b_label(), "Bruno");
    }

    #[test]
    fn test_unknown_attribute_rejected() {
        let result = serde_json::from_str::<ArenaConfig>(
            r#"{"round":"r","attribute":"paciencia","deckA":"a","deckB":"b"}"#,
        );

        assert!(result.is_err());
    }
}

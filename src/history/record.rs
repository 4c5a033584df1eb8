//! Winner records as they appear on the wire.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeKey, CardId};

/// One recorded past outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinnerRecord {
    /// Round identifier the outcome belongs to.
    pub round: String,

    /// Id of the winning card.
    pub winner: CardId,

    /// Id of the losing card.
    pub loser: CardId,

    /// Attribute the round was contested on.
    pub attribute: AttributeKey,

    /// Score gap recorded at resolution time.
    pub diff: f64,

    /// Display name of the deck A participant at the time.
    #[serde(rename = "playerAName", default, skip_serializing_if = "Option::is_none")]
    pub player_a_name: Option<String>,

    /// Display name of the deck B participant at the time.
    #[serde(rename = "playerBName", default, skip_serializing_if = "Option::is_none")]
    pub player_b_name: Option<String>,

    /// Display name of the winning participant.
    #[serde(rename = "winnerName", default, skip_serializing_if = "Option::is_none")]
    pub winner_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_shape() {
        let record: WinnerRecord = serde_json::from_str(
            r#"{
                "round": "2025-10-01-1",
                "winner": "b-profa-renata",
                "loser": "a-prof-ricardo",
                "attribute": "carisma",
                "diff": 12,
                "playerAName": "Ana",
                "playerBName": "Bruno",
                "winnerName": "Bruno"
            }"#,
        )
        .unwrap();

        assert_eq!(record.winner, CardId::new("b-profa-renata"));
        assert_eq!(record.attribute, AttributeKey::Carisma);
        assert_eq!(record.diff, 12.0);
        assert_eq!(record.winner_name.as_deref(), Some("Bruno"));
    }

    #[test]
    fn test_decode_minimal_record() {
        let record: WinnerRecord = serde_json::from_str(
            r#"{"round":"r1","winner":"a-1","loser":"b-1","attribute":"rigor","diff":3}"#,
        )
        .unwrap();

        assert_eq!(record.player_a_name, None);
        assert_eq!(record.winner_name, None);
    }
}

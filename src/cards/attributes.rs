//! Card attributes: the five scores every teacher card carries.
//!
//! Unlike a free-form attribute map, the score set is closed. Resources name
//! scores by their wire keys (`didatica`, `carisma`, `rigor`, `prazos`,
//! `humor`) and nothing else round-trips.
//!
//! ## Lenient decoding
//!
//! A missing or non-numeric score decodes to `0.0` instead of failing the
//! containing card, so score extraction downstream can never fail. Scores
//! are conceptually bounded to [0, 100] but no bounds are enforced here;
//! the view layer clamps for bar rendering only.

use serde::{Deserialize, Deserializer, Serialize};

/// Key naming one of the five card scores.
///
/// Serde names match the JSON wire keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKey {
    /// Teaching quality.
    Didatica,
    /// Charisma.
    Carisma,
    /// Strictness.
    Rigor,
    /// Respect for deadlines.
    Prazos,
    /// Sense of humor.
    Humor,
}

impl AttributeKey {
    /// All five keys, in display order.
    pub const ALL: [AttributeKey; 5] = [
        AttributeKey::Didatica,
        AttributeKey::Carisma,
        AttributeKey::Rigor,
        AttributeKey::Prazos,
        AttributeKey::Humor,
    ];

    /// The JSON wire name of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeKey::Didatica => "didatica",
            AttributeKey::Carisma => "carisma",
            AttributeKey::Rigor => "rigor",
            AttributeKey::Prazos => "prazos",
            AttributeKey::Humor => "humor",
        }
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five scores carried by every card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, deserialize_with = "lenient_score")]
    pub didatica: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub carisma: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub rigor: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub prazos: f64,
    #[serde(default, deserialize_with = "lenient_score")]
    pub humor: f64,
}

impl Attributes {
    /// Get a score by key.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> f64 {
        match key {
            AttributeKey::Didatica => self.didatica,
            AttributeKey::Carisma => self.carisma,
            AttributeKey::Rigor => self.rigor,
            AttributeKey::Prazos => self.prazos,
            AttributeKey::Humor => self.humor,
        }
    }

    /// Set a score by key.
    pub fn set(&mut self, key: AttributeKey, value: f64) {
        match key {
            AttributeKey::Didatica => self.didatica = value,
            AttributeKey::Carisma => self.carisma = value,
            AttributeKey::Rigor => self.rigor = value,
            AttributeKey::Prazos => self.prazos = value,
            AttributeKey::Humor => self.humor = value,
        }
    }
}

/// Accept any JSON value for a score, coercing non-numbers to `0.0`.
fn lenient_score<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

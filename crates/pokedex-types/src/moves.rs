//! Typed view over a stored move.

use serde::{Deserialize, Serialize};

use crate::{Document, NamedRef, Result, decode_document};

/// Effect text for a move in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectEntry {
    /// Effect description.
    pub effect: String,
    /// Language of the description.
    pub language: NamedRef,
}

/// The commonly used fields of a move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveSummary {
    /// Move identifier.
    pub id: u32,
    /// Lowercase name.
    pub name: String,
    /// Accuracy percentage, absent for moves that never miss.
    pub accuracy: Option<u32>,
    /// Base power, absent for status moves.
    pub power: Option<u32>,
    /// Power points.
    pub pp: Option<u32>,
    /// Priority bracket.
    pub priority: i32,
    /// Chance of the secondary effect, in percent.
    pub effect_chance: Option<u32>,
    /// Physical, special or status.
    pub damage_class: NamedRef,
    /// Elemental type.
    #[serde(rename = "type")]
    pub kind: NamedRef,
    /// Effect descriptions.
    pub effect_entries: Vec<EffectEntry>,
}

impl MoveSummary {
    /// Decodes the summary from a stored move document.
    ///
    /// # Errors
    ///
    /// Returns an error if a field has an unexpected shape.
    pub fn from_document(document: &Document) -> Result<Self> {
        decode_document(document, "move summary")
    }

    /// Returns the English effect text, if any.
    #[must_use]
    pub fn english_effect(&self) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.effect.as_str())
    }
}

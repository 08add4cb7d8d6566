//! Typed Pokémon views served by the read API.
//!
//! Stored documents carry the full source payload; these views pick out the
//! fields each endpoint exposes. Missing fields decode to their defaults, but
//! a field of the wrong type is a decode error.

use serde::{Deserialize, Serialize};

use crate::{Document, Result, decode_document};

/// A `{ "name": ... }` reference to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    /// Resource name.
    pub name: String,
}

/// A type slot on a Pokémon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSlot {
    /// Slot order (1 or 2).
    pub slot: u32,
    /// The type occupying the slot.
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

/// An ability slot on a Pokémon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilitySlot {
    /// The ability.
    pub ability: NamedRef,
    /// Whether this is the hidden ability.
    pub is_hidden: bool,
}

/// A base stat entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatEntry {
    /// Base value of the stat.
    pub base_stat: u32,
    /// The stat.
    pub stat: NamedRef,
}

/// Sprites exposed in the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSprites {
    /// Front-facing default sprite URL.
    pub front_default: Option<String>,
}

/// Sprites exposed in the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSprites {
    /// Front-facing default sprite URL.
    pub front_default: Option<String>,
    /// Back-facing default sprite URL.
    pub back_default: Option<String>,
}

/// A Pokémon as shown by `GET /pokemon`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonListItem {
    /// National Pokédex number.
    pub id: u32,
    /// Lowercase name.
    pub name: String,
    /// Type slots.
    pub types: Vec<TypeSlot>,
    /// Sprite URLs.
    pub sprites: ListSprites,
    /// Johto Pokédex entry number, added by the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_id: Option<u32>,
}

impl PokemonListItem {
    /// Decodes the list view from a stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if a field has an unexpected shape.
    pub fn from_document(document: &Document) -> Result<Self> {
        decode_document(document, "pokemon list item")
    }
}

/// A Pokémon as shown by `GET /pokemon/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonDetail {
    /// National Pokédex number.
    pub id: u32,
    /// Lowercase name.
    pub name: String,
    /// Base experience yield. Null for some forms.
    pub base_experience: Option<u32>,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Type slots.
    pub types: Vec<TypeSlot>,
    /// Abilities.
    pub abilities: Vec<AbilitySlot>,
    /// Base stats.
    pub stats: Vec<StatEntry>,
    /// Sprite URLs.
    pub sprites: DetailSprites,
    /// Johto Pokédex entry number, added by the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_id: Option<u32>,
}

impl PokemonDetail {
    /// Decodes the detail view from a stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if a field has an unexpected shape.
    pub fn from_document(document: &Document) -> Result<Self> {
        decode_document(document, "pokemon detail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn cyndaquil() -> Document {
        let Value::Object(doc) = json!({
            "id": 155,
            "name": "cyndaquil",
            "base_experience": 62,
            "height": 5,
            "weight": 79,
            "is_default": true,
            "types": [{ "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }],
            "abilities": [
                { "ability": { "name": "blaze" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "flash-fire" }, "is_hidden": true, "slot": 3 }
            ],
            "stats": [{ "base_stat": 39, "effort": 0, "stat": { "name": "hp" } }],
            "sprites": { "front_default": "front.png", "back_default": null, "other": {} },
            "regional_id": 4
        }) else {
            unreachable!()
        };
        doc
    }

    #[test]
    fn test_list_item_from_document() {
        let item = PokemonListItem::from_document(&cyndaquil()).unwrap();
        assert_eq!(item.id, 155);
        assert_eq!(item.name, "cyndaquil");
        assert_eq!(item.types[0].kind.name, "fire");
        assert_eq!(item.sprites.front_default.as_deref(), Some("front.png"));
        assert_eq!(item.regional_id, Some(4));
    }

    #[test]
    fn test_detail_from_document() {
        let detail = PokemonDetail::from_document(&cyndaquil()).unwrap();
        assert_eq!(detail.base_experience, Some(62));
        assert_eq!(detail.abilities.len(), 2);
        assert!(detail.abilities[1].is_hidden);
        assert_eq!(detail.stats[0].stat.name, "hp");
        assert_eq!(detail.sprites.back_default, None);
    }

    #[test]
    fn test_type_serializes_as_type() {
        let item = PokemonListItem::from_document(&cyndaquil()).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["types"][0]["type"]["name"], "fire");
        assert!(json["types"][0].get("kind").is_none());
    }

    #[test]
    fn test_missing_regional_id_is_omitted() {
        let mut doc = cyndaquil();
        doc.remove("regional_id");
        let item = PokemonListItem::from_document(&doc).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("regional_id").is_none());
    }

    #[test]
    fn test_wrong_field_type_fails() {
        let mut doc = cyndaquil();
        doc.insert("id".to_string(), json!("not a number"));
        assert!(PokemonListItem::from_document(&doc).is_err());
        assert!(PokemonDetail::from_document(&doc).is_err());
    }
}

//! Roster index payloads.

use pokedex_types::RosterRef;
use serde::Deserialize;

/// Pokédex id of the Johto regional Pokédex (HeartGold/SoulSilver).
pub const JOHTO_POKEDEX_ID: u32 = 7;

/// Generations whose moves make up the moves dataset, in roster order.
pub const MOVE_GENERATIONS: std::ops::RangeInclusive<u32> = 1..=4;

#[derive(Debug, Deserialize)]
pub(crate) struct NamedResource {
    pub(crate) name: String,
    pub(crate) url: String,
}

impl From<NamedResource> for RosterRef {
    fn from(resource: NamedResource) -> Self {
        Self::new(resource.name, resource.url)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokedexEntry {
    pub(crate) entry_number: u32,
    pub(crate) pokemon_species: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokedexResponse {
    pub(crate) pokemon_entries: Vec<PokedexEntry>,
}

impl PokedexResponse {
    pub(crate) fn into_roster(self) -> Vec<RosterRef> {
        self.pokemon_entries
            .into_iter()
            .map(|entry| RosterRef::from(entry.pokemon_species).with_regional_id(entry.entry_number))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerationResponse {
    pub(crate) moves: Vec<NamedResource>,
}

impl GenerationResponse {
    pub(crate) fn into_roster(self) -> Vec<RosterRef> {
        self.moves.into_iter().map(RosterRef::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokedex_roster_keeps_entry_order() {
        let response: PokedexResponse = serde_json::from_str(
            r#"{
                "id": 7,
                "pokemon_entries": [
                    { "entry_number": 1, "pokemon_species": { "name": "chikorita", "url": "u1" } },
                    { "entry_number": 2, "pokemon_species": { "name": "bayleef", "url": "u2" } }
                ]
            }"#,
        )
        .unwrap();

        let roster = response.into_roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "chikorita");
        assert_eq!(roster[0].regional_id, Some(1));
        assert_eq!(roster[1].name, "bayleef");
        assert_eq!(roster[1].url, "u2");
    }

    #[test]
    fn test_generation_roster() {
        let response: GenerationResponse = serde_json::from_str(
            r#"{ "id": 1, "moves": [{ "name": "pound", "url": "https://pokeapi.co/api/v2/move/1/" }] }"#,
        )
        .unwrap();

        let roster = response.into_roster();
        assert_eq!(roster, vec![RosterRef::new("pound", "https://pokeapi.co/api/v2/move/1/")]);
    }
}

//! PokeAPI URL construction.

/// Base URL for the public PokeAPI.
pub const BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Builds the URL of a regional Pokédex.
///
/// # Example
///
/// ```
/// use pokedex_fetch::url::{BASE_URL, pokedex_url};
///
/// assert_eq!(pokedex_url(BASE_URL, 7), "https://pokeapi.co/api/v2/pokedex/7");
/// ```
#[must_use]
pub fn pokedex_url(base_url: &str, pokedex_id: u32) -> String {
    format!("{}/pokedex/{pokedex_id}", base_url.trim_end_matches('/'))
}

/// Builds the URL of a generation, which lists the moves it introduced.
#[must_use]
pub fn generation_url(base_url: &str, generation: u32) -> String {
    format!("{}/generation/{generation}", base_url.trim_end_matches('/'))
}

/// Builds the URL of a Pokémon's detail record.
///
/// Regional Pokédex entries point at species; the detail record lives under
/// `/pokemon/{name}` instead.
#[must_use]
pub fn pokemon_url(base_url: &str, name: &str) -> String {
    format!("{}/pokemon/{name}", base_url.trim_end_matches('/'))
}

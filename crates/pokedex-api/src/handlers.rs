//! Request handlers.

use axum::Json;
use axum::extract::{Path, State};
use pokedex_store::validate_key;
use pokedex_types::{PokemonDetail, PokemonListItem, normalize_name};

use crate::{ApiError, ApiState, Result};

/// `GET /pokemon`: every stored Pokémon in collection order.
pub(crate) async fn list_pokemon(State(state): State<ApiState>) -> Result<Json<Vec<PokemonListItem>>> {
    let documents = state.store.list(&state.collection).await?;
    let items = documents
        .iter()
        .map(|stored| PokemonListItem::from_document(&stored.document))
        .collect::<pokedex_types::Result<Vec<_>>>()?;
    tracing::debug!("Listing {} Pokémon", items.len());
    Ok(Json(items))
}

/// `GET /pokemon/{name}`: one Pokémon, matched case-insensitively.
pub(crate) async fn get_pokemon(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<PokemonDetail>> {
    let name = normalize_name(&name);
    tracing::debug!("Looking up {}", name);

    if let Some(detail) = keyed_lookup(&state, &name).await {
        return Ok(Json(detail));
    }

    // Documents written under a different key are still found by name.
    // Unreadable or undecodable documents are passed over.
    for key in state.store.keys(&state.collection).await? {
        if key == name {
            continue;
        }
        if let Some(detail) = read_detail(&state, &key).await {
            if detail.name == name {
                return Ok(Json(detail));
            }
        }
    }
    Err(ApiError::NotFound)
}

async fn keyed_lookup(state: &ApiState, name: &str) -> Option<PokemonDetail> {
    if validate_key(name).is_err() {
        return None;
    }
    read_detail(state, name)
        .await
        .filter(|detail| detail.name == name)
}

/// Reads and decodes one document, or `None` if it is missing or unusable.
async fn read_detail(state: &ApiState, key: &str) -> Option<PokemonDetail> {
    match state.store.get(&state.collection, key).await {
        Ok(document) => document.and_then(|doc| PokemonDetail::from_document(&doc).ok()),
        Err(e) => {
            tracing::warn!("Skipping unreadable document {}: {}", key, e);
            None
        }
    }
}

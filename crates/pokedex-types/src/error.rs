//! Error types for pokedex.

use thiserror::Error;

/// Result type alias for pokedex type conversions.
pub type Result<T> = std::result::Result<T, PokedexError>;

/// Errors that can occur while interpreting pokedex data.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// A stored document could not be decoded into a typed view.
    #[error("Failed to decode {view}: {source}")]
    Decode {
        /// Name of the view that was being decoded.
        view: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A dataset name was not recognized.
    #[error("Unknown dataset: {0}. Valid options: pokemon, moves")]
    UnknownDataset(String),
}

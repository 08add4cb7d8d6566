//! Request errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokedex_store::StoreError;
use pokedex_types::PokedexError;
use thiserror::Error;

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures that end a request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No stored Pokémon has the requested name.
    #[error("Pokemon not found")]
    NotFound,

    /// A stored document does not fit the response shape.
    #[error("Error parsing Pokemon data: {0}")]
    Decode(#[from] PokedexError),

    /// The store could not be read.
    #[error("Error reading Pokemon data: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Decode(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

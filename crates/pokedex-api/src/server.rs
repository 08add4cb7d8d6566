//! Router construction and serving.

use axum::Router;
use axum::routing::get;
use pokedex_store::DocumentStore;
use pokedex_types::Dataset;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::handlers;

/// Shared state for the request handlers.
#[derive(Debug, Clone)]
pub struct ApiState {
    /// Store the documents are read from.
    pub store: Arc<dyn DocumentStore>,
    /// Collection holding the Pokémon documents.
    pub collection: String,
}

impl ApiState {
    /// Serves the Pokémon dataset's collection from `store`.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: Dataset::Pokemon.collection().to_string(),
        }
    }
}

/// Builds the API router.
///
/// Only `GET` is routed; axum answers other methods with 405.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/pokemon", get(handlers::list_pokemon))
        .route("/pokemon/:name", get(handlers::get_pokemon))
        .with_state(state)
}

/// Serves the API on `addr` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: ApiState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server starting on {}...", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

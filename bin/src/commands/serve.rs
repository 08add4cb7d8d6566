//! Serve command implementation.

use anyhow::{Context, Result};
use pokedex_api::ApiState;
use pokedex_store::DocumentStore;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serves the read API on all interfaces until Ctrl-C.
pub(crate) async fn serve(store: Arc<dyn DocumentStore>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    pokedex_api::serve(ApiState::new(store), addr)
        .await
        .with_context(|| format!("Server on {addr} failed"))
}

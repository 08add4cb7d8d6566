//! Populate command implementation.
//!
//! Replaces one dataset's collection with a fresh copy from the PokeAPI.

use anyhow::{Context, Result};
use pokedex_fetch::PokeApiClient;
use pokedex_populate::{PopulateConfig, PopulationReport, Populator};
use pokedex_store::DocumentStore;
use pokedex_types::Dataset;
use std::sync::Arc;
use std::time::Duration;

/// Runs a population for `dataset` and prints a summary unless `quiet`.
pub(crate) async fn populate(
    store: Arc<dyn DocumentStore>,
    dataset: Dataset,
    delay: Duration,
    quiet: bool,
) -> Result<()> {
    tracing::info!("Running {} population...", dataset);

    let client = PokeApiClient::with_defaults().context("Failed to create PokeAPI client")?;
    let populator = Populator::new(client, store, PopulateConfig { delay });

    let report = populator
        .populate(dataset)
        .await
        .with_context(|| format!("{dataset} population failed"))?;

    if !quiet {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &PopulationReport) {
    println!();
    println!("Collection: {}", report.dataset.collection());
    println!("Written:    {}/{}", report.written, report.roster_size);

    if report.errors.is_empty() {
        return;
    }
    println!("Skipped:    {}", report.errors.len());
    for error in &report.errors {
        println!("  - {error}");
    }
}

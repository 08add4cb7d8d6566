//! The fetch-transform-store pipeline.

use chrono::Utc;
use pokedex_fetch::{JOHTO_POKEDEX_ID, MOVE_GENERATIONS, PokeApiClient};
use pokedex_store::DocumentStore;
use pokedex_types::{Dataset, Document, MoveSummary, RosterRef, normalize_name};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::{ItemError, ItemStage, PopulateError, PopulationReport, PopulationRun, Result};

/// Key of the sentinel document written by the health probe.
pub const PROBE_KEY: &str = "_test";

/// Configuration for population runs.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// Fixed wait between roster entries.
    pub delay: Duration,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

/// Rebuilds dataset collections from the PokeAPI.
///
/// A run is strictly sequential: one request in flight at a time, followed
/// by the configured delay.
#[derive(Debug, Clone)]
pub struct Populator {
    client: PokeApiClient,
    store: Arc<dyn DocumentStore>,
    config: PopulateConfig,
}

impl Populator {
    /// Creates a new populator.
    #[must_use]
    pub fn new(
        client: PokeApiClient,
        store: Arc<dyn DocumentStore>,
        config: PopulateConfig,
    ) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    /// Returns the populator configuration.
    #[must_use]
    pub const fn config(&self) -> &PopulateConfig {
        &self.config
    }

    /// Replaces the dataset's collection with a fresh copy from the PokeAPI.
    ///
    /// Entries that cannot be fetched, decoded or stored are skipped and
    /// listed in the returned report.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be enumerated (or is empty),
    /// if the collection cannot be listed for clearing, or if the health
    /// probe cannot write its sentinel document.
    pub async fn populate(&self, dataset: Dataset) -> Result<PopulationReport> {
        let roster = self.enumerate(dataset).await?;
        if roster.is_empty() {
            return Err(PopulateError::EmptyRoster(dataset));
        }
        tracing::info!("Total {} entries to process: {}", dataset, roster.len());

        let mut run = PopulationRun::new(dataset, roster.len());
        self.save_run(&run).await;

        match self.replace_collection(dataset, &roster).await {
            Ok(report) => {
                run.mark_completed(&report);
                self.save_run(&run).await;
                tracing::info!(
                    "Populated {}: {} of {} stored, {} skipped",
                    dataset.collection(),
                    report.written,
                    report.roster_size,
                    report.errors.len()
                );
                Ok(report)
            }
            Err(e) => {
                run.mark_failed(e.to_string());
                self.save_run(&run).await;
                Err(e)
            }
        }
    }

    /// Fetches the roster for a dataset, in roster order.
    ///
    /// # Errors
    ///
    /// Returns an error if the Pokédex cannot be fetched. A generation whose
    /// move list cannot be fetched is logged and left out.
    pub async fn enumerate(&self, dataset: Dataset) -> Result<Vec<RosterRef>> {
        match dataset {
            Dataset::Pokemon => {
                let roster = self
                    .client
                    .pokedex_roster(JOHTO_POKEDEX_ID)
                    .await
                    .map_err(|source| PopulateError::Roster { dataset, source })?;
                tracing::info!("Found {} Pokémon in the Johto Pokédex", roster.len());
                Ok(roster)
            }
            Dataset::Moves => {
                let mut roster = Vec::new();
                for generation in MOVE_GENERATIONS {
                    match self.client.generation_moves(generation).await {
                        Ok(moves) => {
                            tracing::info!("Found {} moves from generation {}", moves.len(), generation);
                            roster.extend(moves);
                        }
                        Err(e) => {
                            tracing::warn!("Skipping generation {}: {}", generation, e);
                        }
                    }
                }
                Ok(roster)
            }
        }
    }

    async fn replace_collection(
        &self,
        dataset: Dataset,
        roster: &[RosterRef],
    ) -> Result<PopulationReport> {
        let collection = dataset.collection();

        self.clear(collection).await?;
        self.probe(collection).await?;

        let mut report = PopulationReport::new(dataset, roster.len());
        for (idx, reference) in roster.iter().enumerate() {
            match self.populate_entry(dataset, reference).await {
                Ok(key) => {
                    report.written += 1;
                    tracing::info!("Stored {} as {}/{}", reference, collection, key);
                }
                Err(e) => {
                    tracing::warn!("Skipping {}", e);
                    report.errors.push(e);
                }
            }

            // Failed entries are throttled too; each one still made a request
            if idx + 1 < roster.len() && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        Ok(report)
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        tracing::info!("Cleaning collection {}...", collection);
        let cleared = self.store.clear(collection).await?;
        for (key, e) in &cleared.failed {
            tracing::warn!("Error deleting document {}: {}", key, e);
        }
        tracing::info!(
            "Collection {} cleaned: {} deleted, {} failed",
            collection,
            cleared.deleted,
            cleared.failed.len()
        );
        Ok(())
    }

    async fn probe(&self, collection: &str) -> Result<()> {
        let mut sentinel = Document::new();
        sentinel.insert("test".to_string(), Value::Bool(true));
        sentinel.insert("timestamp".to_string(), Value::from(Utc::now().to_rfc3339()));

        self.store
            .set(collection, PROBE_KEY, sentinel)
            .await
            .map_err(|source| PopulateError::HealthProbe {
                collection: collection.to_string(),
                source,
            })?;

        if let Err(e) = self.store.delete(collection, PROBE_KEY).await {
            tracing::warn!("Could not delete health probe document in {}: {}", collection, e);
        }
        Ok(())
    }

    /// Fetches, transforms and stores one roster entry, returning its key.
    async fn populate_entry(
        &self,
        dataset: Dataset,
        reference: &RosterRef,
    ) -> std::result::Result<String, ItemError> {
        let fetched = match dataset {
            Dataset::Pokemon => self.client.pokemon_document(&reference.name).await,
            Dataset::Moves => self.client.fetch_document(&reference.url).await,
        };
        let mut document = fetched.map_err(|e| {
            ItemError::new(&reference.name, ItemStage::of_fetch_error(&e), e.to_string())
        })?;

        annotate(&mut document, reference);
        if dataset == Dataset::Moves {
            log_move(&document);
        }

        let key = normalize_name(&reference.name);
        self.store
            .set(dataset.collection(), &key, document)
            .await
            .map_err(|e| ItemError::new(&reference.name, ItemStage::Store, e.to_string()))?;
        Ok(key)
    }

    async fn save_run(&self, run: &PopulationRun) {
        if let Err(e) = run.save(self.store.as_ref()).await {
            tracing::warn!("Could not record {} run state: {}", run.dataset, e);
        }
    }
}

/// Adds the fields the pipeline derives from the roster entry.
fn annotate(document: &mut Document, reference: &RosterRef) {
    if let Some(regional_id) = reference.regional_id {
        document.insert("regional_id".to_string(), Value::from(regional_id));
    }
}

fn log_move(document: &Document) {
    if let Ok(summary) = MoveSummary::from_document(document) {
        tracing::debug!(
            "{}: {} {} power={:?} accuracy={:?}",
            summary.name,
            summary.kind.name,
            summary.damage_class.name,
            summary.power,
            summary.accuracy
        );
    }
}

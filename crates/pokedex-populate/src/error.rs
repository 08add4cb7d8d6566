//! Errors that abort a population run.

use pokedex_fetch::FetchError;
use pokedex_store::StoreError;
use pokedex_types::Dataset;
use thiserror::Error;

/// Result type for population runs.
pub type Result<T> = std::result::Result<T, PopulateError>;

/// Failures that stop a population run.
///
/// Per-entry failures never show up here; they are collected in the
/// [`PopulationReport`](crate::PopulationReport).
#[derive(Error, Debug)]
pub enum PopulateError {
    /// The roster could not be fetched.
    #[error("Failed to enumerate the {dataset} roster: {source}")]
    Roster {
        /// The dataset being populated.
        dataset: Dataset,
        /// The underlying fetch error.
        source: FetchError,
    },

    /// The roster came back empty, so the collection was left untouched.
    #[error("The {0} roster is empty; refusing to clear its collection")]
    EmptyRoster(Dataset),

    /// The sentinel document could not be written.
    #[error("Health probe failed for collection '{collection}': {source}")]
    HealthProbe {
        /// The collection being probed.
        collection: String,
        /// The underlying store error.
        source: StoreError,
    },

    /// A store operation outside the per-entry loop failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A run record could not be encoded or decoded.
    #[error("Invalid population run record: {0}")]
    RunRecord(#[from] serde_json::Error),
}

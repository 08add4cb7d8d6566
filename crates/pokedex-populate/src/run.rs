//! Persisted population run records.
//!
//! A run clears its collection before refilling it, so readers can see an
//! empty or partial collection while it is in progress. The run record makes
//! that window visible: it says `running` until the last entry is processed.

use chrono::{DateTime, Utc};
use pokedex_store::DocumentStore;
use pokedex_types::{Dataset, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{ItemError, PopulationReport, Result};

/// Collection holding one run record per populated collection.
pub const RUNS_COLLECTION: &str = "population-runs";

/// Unique identifier for a population run.
pub type RunId = Uuid;

/// Status of a population run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// The collection is being cleared or refilled.
    #[default]
    Running,
    /// Every roster entry was processed.
    Completed,
    /// The run stopped before processing the roster.
    Failed,
}

impl RunStatus {
    /// Returns true if the run is in a terminal state.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The state of the latest population run for one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationRun {
    /// Unique identifier for this run.
    pub id: RunId,
    /// Dataset being populated.
    pub dataset: Dataset,
    /// Collection being replaced.
    pub collection: String,
    /// Current status of the run.
    pub status: RunStatus,
    /// Timestamp when the run started.
    pub started_at: DateTime<Utc>,
    /// Timestamp when the run completed or failed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Number of roster entries.
    pub roster_size: usize,
    /// Number of documents written.
    pub written: usize,
    /// Entries that were skipped.
    pub errors: Vec<ItemError>,
    /// Error message if the run failed.
    pub error_message: Option<String>,
}

impl PopulationRun {
    /// Starts a new run record.
    #[must_use]
    pub fn new(dataset: Dataset, roster_size: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            dataset,
            collection: dataset.collection().to_string(),
            status: RunStatus::Running,
            started_at: Utc::now(),
            completed_at: None,
            roster_size,
            written: 0,
            errors: Vec::new(),
            error_message: None,
        }
    }

    /// Returns true if the run is in a terminal state.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Marks the run as completed with the given outcome.
    pub fn mark_completed(&mut self, report: &PopulationReport) {
        self.status = RunStatus::Completed;
        self.completed_at = Some(Utc::now());
        self.written = report.written;
        self.errors.clone_from(&report.errors);
    }

    /// Marks the run as failed.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = RunStatus::Failed;
        self.completed_at = Some(Utc::now());
        self.error_message = Some(error.into());
    }

    /// Writes the record, replacing the previous run for the same collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or stored.
    pub async fn save(&self, store: &dyn DocumentStore) -> Result<()> {
        let document: Document = serde_json::from_value(serde_json::to_value(self)?)?;
        store.set(RUNS_COLLECTION, &self.collection, document).await?;
        Ok(())
    }

    /// Loads the latest run record for a dataset, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or decoded.
    pub async fn load(store: &dyn DocumentStore, dataset: Dataset) -> Result<Option<Self>> {
        store
            .get(RUNS_COLLECTION, dataset.collection())
            .await?
            .map(Self::from_document)
            .transpose()
    }

    fn from_document(document: Document) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(document))?)
    }
}

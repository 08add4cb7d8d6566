//! Outcome of a population run.

use pokedex_fetch::FetchError;
use pokedex_types::Dataset;
use serde::{Deserialize, Serialize};

/// Where in the per-entry loop a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStage {
    /// The request failed or returned a non-success status.
    Fetch,
    /// The payload was not a JSON object.
    Decode,
    /// The document could not be written.
    Store,
}

impl ItemStage {
    /// Classifies a fetch error as a transport or a payload failure.
    #[must_use]
    pub const fn of_fetch_error(error: &FetchError) -> Self {
        match error {
            FetchError::Decode { .. } | FetchError::NotAnObject { .. } => Self::Decode,
            FetchError::Http(_) | FetchError::Status { .. } => Self::Fetch,
        }
    }

    /// Returns the stage as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Decode => "decode",
            Self::Store => "store",
        }
    }
}

impl std::fmt::Display for ItemStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A roster entry that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemError {
    /// Roster name of the entry.
    pub name: String,
    /// Stage that failed.
    pub stage: ItemStage,
    /// Error message.
    pub message: String,
}

impl ItemError {
    /// Creates a new item error.
    #[must_use]
    pub fn new(name: impl Into<String>, stage: ItemStage, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stage,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.stage, self.message)
    }
}

/// Summary of a completed population run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationReport {
    /// Dataset that was populated.
    pub dataset: Dataset,
    /// Number of roster entries processed.
    pub roster_size: usize,
    /// Number of documents written.
    pub written: usize,
    /// Entries that were skipped, in roster order.
    pub errors: Vec<ItemError>,
}

impl PopulationReport {
    /// Creates an empty report for a roster.
    #[must_use]
    pub const fn new(dataset: Dataset, roster_size: usize) -> Self {
        Self {
            dataset,
            roster_size,
            written: 0,
            errors: Vec::new(),
        }
    }

    /// Returns true if every roster entry was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty() && self.written == self.roster_size
    }
}

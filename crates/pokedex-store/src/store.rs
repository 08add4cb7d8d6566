//! The document store abstraction.

use async_trait::async_trait;
use pokedex_types::Document;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A collection name or document key cannot be stored.
    #[error("Invalid key '{0}': keys must be non-empty and contain no path separators")]
    InvalidKey(String),

    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored document is not a JSON object.
    #[error("Document '{path}' is not a JSON object")]
    NotAnObject {
        /// The offending document file.
        path: PathBuf,
    },

    /// A stored document is not valid JSON.
    #[error("Failed to parse document '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize a document.
    #[error("Failed to serialize document: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A document together with the key it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Document key within its collection.
    pub key: String,
    /// Document contents.
    pub document: Document,
}

/// Outcome of [`DocumentStore::clear`].
#[derive(Debug, Default)]
pub struct ClearReport {
    /// Number of documents deleted.
    pub deleted: usize,
    /// Documents that could not be deleted, with the reason.
    pub failed: Vec<(String, StoreError)>,
}

/// Named-collection key-value persistence.
///
/// Collections need not be created ahead of time: a collection with no
/// documents lists as empty. Iteration order is ascending by key.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Returns every document in a collection.
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>>;

    /// Returns the document stored under `key`, if any.
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Document>>;

    /// Stores a document under `key`, replacing any existing one.
    async fn set(&self, collection: &str, key: &str, document: Document) -> Result<()>;

    /// Deletes the document stored under `key`. Deleting a missing key succeeds.
    async fn delete(&self, collection: &str, key: &str) -> Result<()>;

    /// Returns the keys of every document in a collection.
    async fn keys(&self, collection: &str) -> Result<Vec<String>> {
        Ok(self
            .list(collection)
            .await?
            .into_iter()
            .map(|stored| stored.key)
            .collect())
    }

    /// Deletes every document in a collection.
    ///
    /// Individual delete failures are collected rather than returned, so one
    /// stuck document does not stop the rest from being removed. Only a
    /// failure to enumerate the collection is an error.
    async fn clear(&self, collection: &str) -> Result<ClearReport> {
        let mut report = ClearReport::default();
        for key in self.keys(collection).await? {
            match self.delete(collection, &key).await {
                Ok(()) => report.deleted += 1,
                Err(e) => report.failed.push((key, e)),
            }
        }
        Ok(report)
    }
}

/// Checks that a collection name or document key can be stored.
///
/// Keys become file names in [`FsStore`](crate::FsStore), so they must be
/// non-empty, must not be `.` or `..`, and must not contain path separators.
///
/// # Errors
///
/// Returns [`StoreError::InvalidKey`] if the key is rejected.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

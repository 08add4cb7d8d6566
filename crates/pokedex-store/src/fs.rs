//! Filesystem-backed document store.

use async_trait::async_trait;
use directories::ProjectDirs;
use pokedex_types::Document;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{DocumentStore, Result, StoreError, StoredDocument, validate_key};

/// Stores documents as JSON files on the local filesystem.
///
/// Documents live in `<base>/<collection>/<key>.json`, one file each.
#[derive(Debug, Clone)]
pub struct FsStore {
    /// Base directory holding one subdirectory per collection.
    base_path: PathBuf,
}

impl FsStore {
    /// Creates a store rooted at the given base path.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        if !base_path.exists() {
            std::fs::create_dir_all(&base_path).map_err(|e| StoreError::CreateDir {
                path: base_path.clone(),
                source: e,
            })?;
        }
        Ok(Self { base_path })
    }

    /// Opens the store for a project inside a data directory.
    ///
    /// Each project gets its own subdirectory so that several projects can
    /// share one data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the project id is not a valid key or the
    /// directory cannot be created.
    pub fn open(data_dir: &Path, project_id: &str) -> Result<Self> {
        validate_key(project_id)?;
        Self::new(data_dir.join(project_id))
    }

    /// Returns the default data directory.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/pokedex/`
    /// - macOS: `~/Library/Application Support/pokedex/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\pokedex\`
    ///
    /// Falls back to `~/.pokedex/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "pokedex").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Returns the base path for document storage.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the directory holding a collection.
    #[must_use]
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_path.join(collection)
    }

    /// Returns the path of a document's file.
    #[must_use]
    pub fn document_path(&self, collection: &str, key: &str) -> PathBuf {
        self.collection_path(collection).join(format!("{key}.json"))
    }

    /// Returns `(key, path)` for every document file in a collection, sorted by key.
    async fn json_files(&self, collection: &str) -> Result<Vec<(String, PathBuf)>> {
        validate_key(collection)?;
        let dir = self.collection_path(collection);

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::ReadDir { path: dir, source: e }),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::ReadDir {
                path: dir.clone(),
                source: e,
            })?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) {
                    files.push((key.to_string(), path));
                }
            }
        }

        // read_dir order is platform-defined
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    /// Reads a document file, returning `None` if it does not exist.
    async fn read_document(path: &Path) -> Result<Option<Document>> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::ReadFile {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        match serde_json::from_str(&content) {
            Ok(Value::Object(document)) => Ok(Some(document)),
            Ok(_) => Err(StoreError::NotAnObject {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(StoreError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let files = self.json_files(collection).await?;

        let mut documents = Vec::with_capacity(files.len());
        for (key, path) in files {
            // Removed between the directory scan and the read
            if let Some(document) = Self::read_document(&path).await? {
                documents.push(StoredDocument { key, document });
            }
        }

        Ok(documents)
    }

    /// Lists keys from file names alone, so unreadable documents can still
    /// be enumerated and deleted.
    async fn keys(&self, collection: &str) -> Result<Vec<String>> {
        Ok(self
            .json_files(collection)
            .await?
            .into_iter()
            .map(|(key, _)| key)
            .collect())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Document>> {
        validate_key(collection)?;
        validate_key(key)?;
        Self::read_document(&self.document_path(collection, key)).await
    }

    async fn set(&self, collection: &str, key: &str, document: Document) -> Result<()> {
        validate_key(collection)?;
        validate_key(key)?;

        let dir = self.collection_path(collection);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::CreateDir {
                path: dir.clone(),
                source: e,
            })?;

        let path = self.document_path(collection, key);
        let json = serde_json::to_string_pretty(&document)?;

        // Write beside the target and rename, so readers never see a partial file
        let tmp_path = dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp_path, json)
            .await
            .map_err(|e| StoreError::WriteFile {
                path: tmp_path.clone(),
                source: e,
            })?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StoreError::WriteFile { path, source: e })
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<()> {
        validate_key(collection)?;
        validate_key(key)?;
        let path = self.document_path(collection, key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::DeleteFile { path, source: e }),
        }
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".pokedex")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn doc(name: &str, id: u32) -> Document {
        let Value::Object(doc) = json!({ "id": id, "name": name }) else {
            unreachable!()
        };
        doc
    }

    #[test]
    fn test_store_creation() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::open(temp_dir.path(), "my-project").unwrap();

        assert!(store.base_path().exists());
        assert!(store.base_path().ends_with("my-project"));
    }

    #[test]
    fn test_open_rejects_bad_project() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            FsStore::open(temp_dir.path(), "../escape"),
            Err(StoreError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "togepi", doc("togepi", 175)).await.unwrap();

        let loaded = store.get("pokemon", "togepi").await.unwrap().unwrap();
        assert_eq!(loaded["id"], 175);
        assert!(store.document_path("pokemon", "togepi").exists());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.get("pokemon", "missingno").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "togepi", doc("togepi", 1)).await.unwrap();
        store.set("pokemon", "togepi", doc("togepi", 175)).await.unwrap();

        let all = store.list("pokemon").await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].document["id"], 175);
    }

    #[tokio::test]
    async fn test_list_sorted_by_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        for name in ["wooper", "azumarill", "marill"] {
            store.set("pokemon", name, doc(name, 0)).await.unwrap();
        }

        let keys = store.keys("pokemon").await.unwrap();
        assert_eq!(keys, vec!["azumarill", "marill", "wooper"]);
    }

    #[tokio::test]
    async fn test_list_missing_collection_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert!(store.list("nothing-here").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_fails_on_corrupt_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "ok", doc("ok", 1)).await.unwrap();
        std::fs::write(store.document_path("pokemon", "bad"), "[1, 2]").unwrap();
        assert!(matches!(
            store.list("pokemon").await,
            Err(StoreError::NotAnObject { .. })
        ));

        std::fs::write(store.document_path("pokemon", "bad"), "{ truncated").unwrap();
        assert!(matches!(
            store.list("pokemon").await,
            Err(StoreError::ParseJson { .. })
        ));
    }

    #[tokio::test]
    async fn test_keys_and_clear_skip_parsing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "ok", doc("ok", 1)).await.unwrap();
        std::fs::write(store.document_path("pokemon", "bad"), "{ truncated").unwrap();

        assert_eq!(store.keys("pokemon").await.unwrap(), vec!["bad", "ok"]);

        let report = store.clear("pokemon").await.unwrap();
        assert_eq!(report.deleted, 2);
        assert!(report.failed.is_empty());
        assert!(!store.document_path("pokemon", "bad").exists());
    }

    #[tokio::test]
    async fn test_set_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "togepi", doc("togepi", 175)).await.unwrap();

        let names: Vec<String> = std::fs::read_dir(store.collection_path("pokemon"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["togepi.json"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "togepi", doc("togepi", 175)).await.unwrap();
        store.delete("pokemon", "togepi").await.unwrap();
        assert!(store.get("pokemon", "togepi").await.unwrap().is_none());

        // Deleting again is not an error
        store.delete("pokemon", "togepi").await.unwrap();
    }

    #[tokio::test]
    async fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.set("pokemon", "a", doc("a", 1)).await.unwrap();
        store.set("pokemon", "b", doc("b", 2)).await.unwrap();
        store.set("moves", "tackle", doc("tackle", 33)).await.unwrap();

        let report = store.clear("pokemon").await.unwrap();
        assert_eq!(report.deleted, 2);
        assert!(report.failed.is_empty());
        assert!(store.list("pokemon").await.unwrap().is_empty());
        assert_eq!(store.list("moves").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_path_traversal_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::new(temp_dir.path().to_path_buf()).unwrap();

        let result = store.set("pokemon", "../outside", doc("x", 0)).await;
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));
    }
}

//! File-backed store, the desktop counterpart of browser local storage.

use super::KeyValueStore;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

type Entries = BTreeMap<String, String>;

/// String map persisted as a single JSON object.
///
/// Reads are served from memory. Writes are staged as a [`PendingWrite`],
/// committed to disk, and only then applied with [`LocalStorage::apply`], so a
/// failed write never leaves the in-memory view ahead of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    path: PathBuf,
    entries: Entries,
}

impl LocalStorage {
    /// Creates an empty store that will persist to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Entries::new(),
        }
    }

    /// Opens the store at `path`.
    ///
    /// Never fails: a missing, unreadable or malformed file yields an empty
    /// store, which reads as an anonymous session.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::read_entries(&path).await {
            Ok(entries) => Self { path, entries },
            Err(e) => {
                log::warn!("Ignoring local storage at {}: {e:#}", path.display());
                Self::empty(path)
            }
        }
    }

    async fn read_entries(path: &Path) -> Result<Entries> {
        let exists = fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check {}", path.display()))?;
        if !exists {
            return Ok(Entries::new());
        }
        let json = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json).context("Local storage is not a JSON object of strings")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stages `key = value` on top of the current contents.
    pub fn with_item(&self, key: &str, value: &str) -> PendingWrite {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        PendingWrite {
            path: self.path.clone(),
            entries,
        }
    }

    /// Stages removal of `key`.
    pub fn without_item(&self, key: &str) -> PendingWrite {
        let mut entries = self.entries.clone();
        entries.remove(key);
        PendingWrite {
            path: self.path.clone(),
            entries,
        }
    }

    /// Replaces the in-memory contents with a committed write.
    pub fn apply(&mut self, committed: Committed) {
        self.entries = committed.0;
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Store contents waiting to be written to disk.
#[derive(Debug)]
#[must_use = "a pending write does nothing until committed"]
pub struct PendingWrite {
    path: PathBuf,
    entries: Entries,
}

/// Contents that are known to be on disk.
#[derive(Debug)]
pub struct Committed(Entries);

impl PendingWrite {
    /// Writes the staged contents, creating the parent directory if needed.
    pub async fn commit(self) -> Result<Committed> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(Committed(self.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "jewelryCalc.currentUser";

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStorage::open(dir.path().join("local_storage.json")).await;
        assert!(store.is_empty());
        assert_eq!(store.get(KEY), None);
    }

    #[tokio::test]
    async fn malformed_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = LocalStorage::open(&path).await;
        assert!(store.is_empty());
        assert_eq!(store.path(), path);
    }

    #[tokio::test]
    async fn non_string_values_open_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        std::fs::write(&path, r#"{"jewelryCalc.currentUser": 42}"#).unwrap();

        assert_eq!(LocalStorage::open(&path).await.get(KEY), None);
    }

    #[tokio::test]
    async fn inaccessible_path_is_reported_not_treated_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        // A regular file where a directory should be.
        let path = blocker.join("local_storage.json");

        let err = LocalStorage::read_entries(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to check"));
        assert!(LocalStorage::open(&path).await.is_empty());
    }

    #[tokio::test]
    async fn committed_write_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local_storage.json");

        let mut store = LocalStorage::open(&path).await;
        let committed = store.with_item(KEY, "alice").commit().await.unwrap();
        store.apply(committed);
        assert_eq!(store.get(KEY).as_deref(), Some("alice"));

        let reopened = LocalStorage::open(&path).await;
        assert_eq!(reopened, store);
    }

    #[tokio::test]
    async fn staged_write_is_invisible_until_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LocalStorage::empty(dir.path().join("local_storage.json"));

        let pending = store.with_item(KEY, "alice");
        assert_eq!(store.get(KEY), None);

        let committed = pending.commit().await.unwrap();
        assert_eq!(store.get(KEY), None);
        store.apply(committed);
        assert_eq!(store.get(KEY).as_deref(), Some("alice"));

        let committed = store.without_item(KEY).commit().await.unwrap();
        store.apply(committed);
        assert_eq!(store.get(KEY), None);
        assert_eq!(LocalStorage::open(store.path()).await.get(KEY), None);
    }

    #[tokio::test]
    async fn failed_commit_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("local_storage.json");
        std::fs::create_dir(&path).unwrap();

        let store = LocalStorage::empty(&path);
        let err = store.with_item(KEY, "alice").commit().await.unwrap_err();
        assert!(format!("{err:#}").contains("local_storage.json"));
    }
}

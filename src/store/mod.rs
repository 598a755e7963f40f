//! Mood document store
//!
//! The entire mood log is one JSON document on disk: a mapping from user id
//! to that user's ordered entry list. Every operation reads the document
//! fresh and writes it back whole; there is no partial read/write and no
//! in-memory cache across calls.
//!
//! Mutations go through [`StoreHandle::update`], which serializes the full
//! read-modify-write cycle behind an async mutex so concurrent callers in
//! this process cannot clobber each other's writes. The lock is in-process
//! only: a second process sharing the same file still has the classic
//! lost-update race, and callers who need cross-process safety must arrange
//! it outside the store.

pub mod error;

pub use error::{StoreError, StoreResult};

use crate::classify::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// One journaled mood record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Opaque id, unique within the owning user's sequence
    pub entry_id: String,
    /// ISO-8601 calendar date, compared by exact string equality
    pub date: String,
    /// Raw mood label as submitted
    pub mood: String,
    /// Always the classifier's output for the current `mood`
    pub mood_category: Category,
    /// Free-text journal body
    pub journal_text: String,
}

/// Ordered entry sequence for one user, in submission order.
///
/// Not necessarily sorted by `date`: entries can be backdated.
pub type UserLog = Vec<MoodEntry>;

/// The whole persisted document: user id to entry sequence
pub type MoodStore = HashMap<String, UserLog>;

/// Handle to the mood document on disk.
///
/// Cheap to share behind an `Arc`; holds no document state, only the path
/// and the write lock.
pub struct StoreHandle {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl StoreHandle {
    /// Create a handle for the document at `path`.
    ///
    /// The file does not need to exist yet; it is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the underlying document file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full document.
    ///
    /// A missing file is an empty store, not an error.
    pub async fn load(&self) -> StoreResult<MoodStore> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(MoodStore::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Run a read-modify-write cycle under the write lock.
    ///
    /// Loads a fresh copy of the document, applies `mutate`, and saves the
    /// result only if the closure succeeds. A closure error leaves the
    /// document on disk untouched, so there are no partial commits.
    pub async fn update<F, T, E>(&self, mutate: F) -> Result<T, E>
    where
        F: FnOnce(&mut MoodStore) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await?;
        let out = mutate(&mut store)?;
        self.save(&store).await?;
        Ok(out)
    }

    /// Persist the full document, replacing whatever was there.
    ///
    /// Written to a sibling temp file and renamed into place, so a crash
    /// mid-write cannot leave a truncated document behind.
    async fn save(&self, store: &MoodStore) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(store)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use tempfile::tempdir;

    fn entry(id: &str, date: &str, mood: &str) -> MoodEntry {
        MoodEntry {
            entry_id: id.to_string(),
            date: date.to_string(),
            mood: mood.to_string(),
            mood_category: classify(mood),
            journal_text: String::new(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let handle = StoreHandle::new(dir.path().join("mood_log.json"));

        let store = handle.load().await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_persists_document() {
        let dir = tempdir().unwrap();
        let handle = StoreHandle::new(dir.path().join("mood_log.json"));

        handle
            .update(|store| {
                store
                    .entry("lea".to_string())
                    .or_default()
                    .push(entry("e1", "2026-08-20", "happy"));
                Ok::<_, StoreError>(())
            })
            .await
            .unwrap();

        let store = handle.load().await.unwrap();
        assert_eq!(store["lea"].len(), 1);
        assert_eq!(store["lea"][0].mood, "happy");
        assert_eq!(store["lea"][0].mood_category, Category::Positive);
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_persist() {
        let dir = tempdir().unwrap();
        let handle = StoreHandle::new(dir.path().join("mood_log.json"));

        handle
            .update(|store| {
                store
                    .entry("lea".to_string())
                    .or_default()
                    .push(entry("e1", "2026-08-20", "happy"));
                Ok::<_, StoreError>(())
            })
            .await
            .unwrap();

        let result: Result<(), StoreError> = handle
            .update(|store| {
                store.clear();
                Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "rejected",
                )))
            })
            .await;
        assert!(result.is_err());

        // First write must still be intact
        let store = handle.load().await.unwrap();
        assert_eq!(store["lea"].len(), 1);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let handle = StoreHandle::new(dir.path().join("nested").join("mood_log.json"));

        handle
            .update(|store| {
                store.insert("lea".to_string(), Vec::new());
                Ok::<_, StoreError>(())
            })
            .await
            .unwrap();

        assert!(handle.path().exists());
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_serialized() {
        let dir = tempdir().unwrap();
        let handle = std::sync::Arc::new(StoreHandle::new(dir.path().join("mood_log.json")));

        let mut tasks = Vec::new();
        for i in 0..10 {
            let handle = std::sync::Arc::clone(&handle);
            tasks.push(tokio::spawn(async move {
                handle
                    .update(move |store| {
                        store
                            .entry("lea".to_string())
                            .or_default()
                            .push(entry(&format!("e{}", i), "2026-08-20", "calm"));
                        Ok::<_, StoreError>(())
                    })
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        // Every write must survive: no lost updates within the process
        let store = handle.load().await.unwrap();
        assert_eq!(store["lea"].len(), 10);
    }
}

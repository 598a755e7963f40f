//! Entry lifecycle
//!
//! Create, update, delete and read operations over a user's mood log.
//! Classification is delegated to [`crate::classify`] and persistence to
//! [`crate::store`]; every operation runs one full read-modify-write cycle
//! against the shared document.

use crate::classify::classify;
use crate::store::{MoodEntry, StoreError, StoreHandle, UserLog};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted length of a raw mood label
const MAX_MOOD_LEN: usize = 100;

/// Maximum accepted length of a journal body
const MAX_JOURNAL_LEN: usize = 10_000;

/// Errors that can occur in the entry lifecycle
#[derive(Error, Debug)]
pub enum JournalError {
    /// Referenced user or entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input, rejected before any store access
    #[error("Validation error: {0}")]
    Validation(String),

    /// Underlying store read or write failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

/// Source of fresh entry ids.
///
/// Injected so tests can produce deterministic ids; the default is
/// [`UuidGenerator`].
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Id generator backed by UUID v4
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Entry lifecycle manager bound to the shared store
pub struct MoodJournal {
    store: Arc<StoreHandle>,
    ids: Arc<dyn IdGenerator>,
}

impl MoodJournal {
    /// Create a journal with the default UUID id generator
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self::with_id_generator(store, Arc::new(UuidGenerator))
    }

    /// Create a journal with a custom id generator
    pub fn with_id_generator(store: Arc<StoreHandle>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Log a new mood entry for a user.
    ///
    /// Generates a fresh entry id, classifies the mood, appends to the
    /// user's sequence (creating it on first entry), and persists the
    /// whole document before returning the created entry.
    pub async fn create(
        &self,
        user_id: &str,
        date: &str,
        mood: &str,
        journal_text: &str,
    ) -> JournalResult<MoodEntry> {
        validate_user_id(user_id)?;
        validate_date(date)?;
        validate_mood(mood)?;
        validate_journal_text(journal_text)?;

        let entry = MoodEntry {
            entry_id: self.ids.new_id(),
            date: date.to_string(),
            mood: mood.to_string(),
            mood_category: classify(mood),
            journal_text: journal_text.to_string(),
        };
        let created = entry.clone();

        let user_id = user_id.to_string();
        self.store
            .update(move |store| {
                store.entry(user_id).or_default().push(entry);
                Ok::<_, JournalError>(())
            })
            .await?;

        tracing::debug!(entry_id = %created.entry_id, category = %created.mood_category, "Logged mood entry");
        Ok(created)
    }

    /// Update an existing entry's mood and journal text.
    ///
    /// The entry is located by id within the user's sequence; `date` and
    /// `entry_id` are immutable, and the category is recomputed from the
    /// new mood. Nothing is written when the entry is not found.
    pub async fn update(
        &self,
        user_id: &str,
        entry_id: &str,
        mood: &str,
        journal_text: &str,
    ) -> JournalResult<MoodEntry> {
        validate_user_id(user_id)?;
        validate_entry_id(entry_id)?;
        validate_mood(mood)?;
        validate_journal_text(journal_text)?;

        let user = user_id.to_string();
        let id = entry_id.to_string();
        let mood = mood.to_string();
        let journal_text = journal_text.to_string();

        self.store
            .update(move |store| {
                let log = store
                    .get_mut(&user)
                    .ok_or_else(|| JournalError::NotFound(format!("user '{}' has no mood log", user)))?;

                let entry = log
                    .iter_mut()
                    .find(|e| e.entry_id == id)
                    .ok_or_else(|| JournalError::NotFound(format!("entry '{}' not found", id)))?;

                entry.mood_category = classify(&mood);
                entry.mood = mood;
                entry.journal_text = journal_text;
                Ok(entry.clone())
            })
            .await
    }

    /// Delete an entry from a user's log.
    ///
    /// Defined as a filter, so duplicate ids (should they ever occur) are
    /// all removed. Deleting a nonexistent id is a no-op success.
    pub async fn delete(&self, user_id: &str, entry_id: &str) -> JournalResult<()> {
        validate_user_id(user_id)?;
        validate_entry_id(entry_id)?;

        let user = user_id.to_string();
        let id = entry_id.to_string();

        self.store
            .update(move |store| {
                let log = store.entry(user).or_default();
                log.retain(|e| e.entry_id != id);
                Ok::<_, JournalError>(())
            })
            .await
    }

    /// Read a user's full log.
    ///
    /// Fails with `NotFound` only when the user has never logged an entry;
    /// an empty sequence (all entries deleted) is a successful read.
    pub async fn read(&self, user_id: &str) -> JournalResult<UserLog> {
        validate_user_id(user_id)?;

        let store = self.store.load().await?;
        store
            .get(user_id)
            .cloned()
            .ok_or_else(|| JournalError::NotFound(format!("user '{}' has no mood log", user_id)))
    }
}

fn validate_user_id(user_id: &str) -> JournalResult<()> {
    if user_id.is_empty() {
        return Err(JournalError::Validation("user_id cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_entry_id(entry_id: &str) -> JournalResult<()> {
    if entry_id.is_empty() {
        return Err(JournalError::Validation("entry_id cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_mood(mood: &str) -> JournalResult<()> {
    if mood.is_empty() {
        return Err(JournalError::Validation("mood cannot be empty".to_string()));
    }
    if mood.len() > MAX_MOOD_LEN {
        return Err(JournalError::Validation(format!(
            "mood exceeds maximum length of {} characters",
            MAX_MOOD_LEN
        )));
    }
    Ok(())
}

fn validate_journal_text(journal_text: &str) -> JournalResult<()> {
    if journal_text.len() > MAX_JOURNAL_LEN {
        return Err(JournalError::Validation(format!(
            "journal_text exceeds maximum length of {} characters",
            MAX_JOURNAL_LEN
        )));
    }
    Ok(())
}

// Aggregation matches dates by exact string equality, so anything that is
// not a plain `YYYY-MM-DD` would silently never aggregate.
fn validate_date(date: &str) -> JournalResult<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| JournalError::Validation(format!("date '{}' is not an ISO-8601 calendar date", date)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// Deterministic id generator for tests
    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn new_id(&self) -> String {
            format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn test_journal(dir: &tempfile::TempDir) -> MoodJournal {
        let store = Arc::new(StoreHandle::new(dir.path().join("mood_log.json")));
        MoodJournal::with_id_generator(store, Arc::new(SequentialIds(AtomicUsize::new(0))))
    }

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let created = journal
            .create("lea", "2026-08-20", "happy", "good day")
            .await
            .unwrap();
        assert_eq!(created.entry_id, "id-0");
        assert_eq!(created.mood_category, Category::Positive);

        let log = journal.read("lea").await.unwrap();
        assert_eq!(log, vec![created]);
    }

    #[tokio::test]
    async fn test_create_preserves_submission_order() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        journal.create("lea", "2026-08-20", "happy", "").await.unwrap();
        // Backdated entry still appends at the end
        journal.create("lea", "2026-08-18", "sad", "").await.unwrap();

        let log = journal.read("lea").await.unwrap();
        assert_eq!(log[0].date, "2026-08-20");
        assert_eq!(log[1].date, "2026-08-18");
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_date() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let err = journal
            .create("lea", "20th of August", "happy", "")
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));

        // Rejected before any store access: nothing was created
        assert!(journal.read("lea").await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_mood() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let err = journal.create("lea", "2026-08-20", "", "").await.unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_recomputes_category() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let created = journal
            .create("lea", "2026-08-20", "happy", "good day")
            .await
            .unwrap();

        let updated = journal
            .update("lea", &created.entry_id, "stressed", "deadline moved up")
            .await
            .unwrap();
        assert_eq!(updated.entry_id, created.entry_id);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.mood, "stressed");
        assert_eq!(updated.mood_category, Category::Negative);
        assert_eq!(updated.journal_text, "deadline moved up");
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let created = journal.create("lea", "2026-08-20", "happy", "").await.unwrap();

        let first = journal
            .update("lea", &created.entry_id, "calm", "settled down")
            .await
            .unwrap();
        let second = journal
            .update("lea", &created.entry_id, "calm", "settled down")
            .await
            .unwrap();
        assert_eq!(first, second);

        let log = journal.read("lea").await.unwrap();
        assert_eq!(log, vec![second]);
    }

    #[tokio::test]
    async fn test_update_unknown_entry_is_not_found() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        journal.create("lea", "2026-08-20", "happy", "").await.unwrap();

        let err = journal
            .update("lea", "missing", "calm", "")
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::NotFound(_)));

        let err = journal.update("nobody", "id-0", "calm", "").await.unwrap_err();
        assert!(matches!(err, JournalError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_entry() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let created = journal.create("lea", "2026-08-20", "happy", "").await.unwrap();
        journal.create("lea", "2026-08-21", "calm", "").await.unwrap();

        journal.delete("lea", &created.entry_id).await.unwrap();

        let log = journal.read("lea").await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].date, "2026-08-21");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        journal.create("lea", "2026-08-20", "happy", "").await.unwrap();
        journal.delete("lea", "missing").await.unwrap();

        let log = journal.read("lea").await.unwrap();
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_for_unknown_user_materializes_empty_log() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        // Delete is a filter over the (created-if-absent) sequence, so an
        // unknown user ends up with an empty, readable log.
        journal.delete("nobody", "missing").await.unwrap();

        let log = journal.read("nobody").await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_delete_all_leaves_empty_log_readable() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let created = journal.create("lea", "2026-08-20", "happy", "").await.unwrap();
        journal.delete("lea", &created.entry_id).await.unwrap();

        // The key survives with an empty sequence; read still succeeds
        let log = journal.read("lea").await.unwrap();
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_read_unknown_user_is_not_found() {
        let dir = tempdir().unwrap();
        let journal = test_journal(&dir);

        let err = journal.read("nobody").await.unwrap_err();
        assert!(matches!(err, JournalError::NotFound(_)));
    }
}

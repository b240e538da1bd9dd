use crate::errors::AppError;
use crate::models::{new_entry_id, Entry, ImportSummary};
use crate::mood::MoodLevel;
use crate::storage::{load_entries, persist_entries};
use crate::transfer::merge_import;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// The mood history, one entry per calendar date, backed by the snapshot
/// slot at `path`. Every mutation writes the full snapshot before it is
/// applied in memory; a failed write leaves the store as it was.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    by_date: BTreeMap<String, Entry>,
}

impl EntryStore {
    pub async fn open(path: PathBuf) -> Self {
        let entries = load_entries(&path).await;
        info!(count = entries.len(), "loaded mood entries from {}", path.display());
        Self::with_entries(path, entries)
    }

    pub fn with_entries(path: PathBuf, entries: Vec<Entry>) -> Self {
        let by_date = entries
            .into_iter()
            .map(|entry| (entry.date.clone(), entry))
            .collect();
        Self { path, by_date }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries, newest date first.
    pub fn entries(&self) -> Vec<Entry> {
        self.by_date.values().rev().cloned().collect()
    }

    pub fn get(&self, date: &str) -> Option<&Entry> {
        self.by_date.get(date)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Records `mood` for `date`, replacing any entry already on that date
    /// but keeping its id.
    pub async fn upsert(
        &mut self,
        date: &str,
        mood: &MoodLevel,
        note: &str,
    ) -> Result<Entry, AppError> {
        let id = match self.by_date.get(date) {
            Some(existing) => existing.id.clone(),
            None => new_entry_id(),
        };
        let entry = Entry {
            id,
            date: date.to_string(),
            mood_key: mood.key.to_string(),
            score: mood.score,
            note: note.trim().to_string(),
        };

        let mut next = self.by_date.clone();
        next.insert(entry.date.clone(), entry.clone());
        self.commit(next).await?;

        info!(date, mood = mood.key, "saved mood entry");
        Ok(entry)
    }

    /// Drops every entry carrying `id`. Imports keep incoming ids, so more
    /// than one date can share one. Returns whether anything was removed.
    pub async fn remove(&mut self, id: &str) -> Result<bool, AppError> {
        let mut next = self.by_date.clone();
        next.retain(|_, entry| entry.id != id);
        let removed = self.by_date.len() - next.len();
        if removed == 0 {
            return Ok(false);
        }
        self.commit(next).await?;

        info!(id, removed, "deleted mood entry");
        Ok(true)
    }

    pub async fn clear(&mut self) -> Result<usize, AppError> {
        let cleared = self.by_date.len();
        self.commit(BTreeMap::new()).await?;
        info!(cleared, "cleared mood history");
        Ok(cleared)
    }

    pub async fn merge_import(
        &mut self,
        incoming: &serde_json::Value,
    ) -> Result<ImportSummary, AppError> {
        let outcome = merge_import(&self.entries(), incoming)?;
        let next = outcome
            .entries
            .into_iter()
            .map(|entry| (entry.date.clone(), entry))
            .collect();
        self.commit(next).await?;

        let summary = ImportSummary {
            accepted: outcome.accepted,
            skipped: outcome.skipped,
            total: self.by_date.len(),
        };
        info!(
            accepted = summary.accepted,
            skipped = summary.skipped,
            total = summary.total,
            "imported mood entries"
        );
        Ok(summary)
    }

    async fn commit(&mut self, next: BTreeMap<String, Entry>) -> Result<(), AppError> {
        persist_entries(&self.path, next.values().rev()).await?;
        self.by_date = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::slot_path;
    use serde_json::json;

    fn mood(key: &str) -> &'static MoodLevel {
        MoodLevel::from_key(key).unwrap()
    }

    async fn open_temp() -> (tempfile::TempDir, EntryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = EntryStore::open(slot_path(dir.path())).await;
        (dir, store)
    }

    #[tokio::test]
    async fn upsert_same_date_keeps_first_id() {
        let (_dir, mut store) = open_temp().await;

        let first = store.upsert("2024-05-01", mood("bad"), "rainy").await.unwrap();
        let second = store.upsert("2024-05-01", mood("great"), "  sunny  ").await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(second.id, first.id);
        let stored = store.get("2024-05-01").unwrap();
        assert_eq!(stored.mood_key, "great");
        assert_eq!(stored.score, 5);
        assert_eq!(stored.note, "sunny");
    }

    #[tokio::test]
    async fn entries_are_sorted_newest_first_and_persisted() {
        let (_dir, mut store) = open_temp().await;
        store.upsert("2024-05-02", mood("ok"), "").await.unwrap();
        store.upsert("2024-05-09", mood("good"), "").await.unwrap();
        store.upsert("2024-04-30", mood("bad"), "").await.unwrap();

        let dates: Vec<String> = store.entries().into_iter().map(|e| e.date).collect();
        assert_eq!(dates, vec!["2024-05-09", "2024-05-02", "2024-04-30"]);

        let reopened = EntryStore::open(store.path().to_path_buf()).await;
        assert_eq!(reopened.entries(), store.entries());
    }

    #[tokio::test]
    async fn remove_unknown_id_is_a_no_op() {
        let (_dir, mut store) = open_temp().await;
        let saved = store.upsert("2024-05-02", mood("ok"), "").await.unwrap();

        assert!(!store.remove("missing").await.unwrap());
        assert_eq!(store.len(), 1);

        assert!(store.remove(&saved.id).await.unwrap());
        assert!(store.is_empty());
        let reopened = EntryStore::open(store.path().to_path_buf()).await;
        assert!(reopened.is_empty());
    }

    #[tokio::test]
    async fn remove_drops_every_entry_sharing_the_id() {
        let (_dir, mut store) = open_temp().await;
        let saved = store.upsert("2024-05-01", mood("ok"), "").await.unwrap();
        store.upsert("2024-05-03", mood("bad"), "").await.unwrap();
        store
            .merge_import(&json!([
                {"id": saved.id, "date": "2024-05-09", "moodKey": "great", "score": 5},
            ]))
            .await
            .unwrap();
        assert_eq!(store.len(), 3);

        assert!(store.remove(&saved.id).await.unwrap());

        let dates: Vec<String> = store.entries().into_iter().map(|e| e.date).collect();
        assert_eq!(dates, vec!["2024-05-03"]);
        let reopened = EntryStore::open(store.path().to_path_buf()).await;
        assert_eq!(reopened.entries(), store.entries());
    }

    #[tokio::test]
    async fn clear_empties_slot() {
        let (_dir, mut store) = open_temp().await;
        store.upsert("2024-05-02", mood("ok"), "").await.unwrap();
        store.upsert("2024-05-03", mood("ok"), "").await.unwrap();

        assert_eq!(store.clear().await.unwrap(), 2);
        let reopened = EntryStore::open(store.path().to_path_buf()).await;
        assert!(reopened.is_empty());
    }

    #[tokio::test]
    async fn import_merges_and_persists() {
        let (_dir, mut store) = open_temp().await;
        store.upsert("2024-05-02", mood("ok"), "before").await.unwrap();

        let summary = store
            .merge_import(&json!([
                {"date": "2024-05-02", "moodKey": "great", "score": 5, "note": "after"},
                {"date": "2024-05-03", "moodKey": "bad"},
            ]))
            .await
            .unwrap();

        assert_eq!(summary, ImportSummary { accepted: 1, skipped: 1, total: 1 });
        let reopened = EntryStore::open(store.path().to_path_buf()).await;
        assert_eq!(reopened.get("2024-05-02").unwrap().note, "after");
    }

    #[tokio::test]
    async fn rejected_import_leaves_store_untouched() {
        let (_dir, mut store) = open_temp().await;
        store.upsert("2024-05-02", mood("ok"), "").await.unwrap();
        let before = store.entries();

        assert!(store.merge_import(&json!({"entries": []})).await.is_err());
        assert_eq!(store.entries(), before);
    }

    #[tokio::test]
    async fn failed_write_keeps_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("slot.json");
        let mut store = EntryStore::open(path).await;

        assert!(store.upsert("2024-05-02", mood("ok"), "").await.is_err());
        assert!(store.is_empty());
    }
}

use crate::error::AppError;
use crate::models::UploadedFileRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the single JSON blob holding all records.
pub const HISTORY_FILE: &str = "uploaded_files.json";

/// Repository over the persisted upload history.
///
/// The whole array is read, mutated in memory, and rewritten on every
/// change. Record counts are expected to stay small; scaling this store is
/// out of scope.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(HISTORY_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records. A missing file is an empty history; a file that
    /// exists but does not parse is an error.
    pub fn load(&self) -> Result<Vec<UploadedFileRecord>, AppError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Rewrites the whole history blob.
    pub fn save(&self, records: &[UploadedFileRecord]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(records)?;
        std::fs::write(&self.path, raw)?;
        debug!("Persisted {} history records", records.len());
        Ok(())
    }

    /// Appends one record and persists.
    pub fn append(&self, record: UploadedFileRecord) -> Result<(), AppError> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)
    }

    /// Removes the record at `index` and persists. Returns the removed
    /// record, or `None` when the index is out of range (nothing changes).
    pub fn remove_at(&self, index: usize) -> Result<Option<UploadedFileRecord>, AppError> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Ok(None);
        }
        let removed = records.remove(index);
        self.save(&records)?;
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(name: &str) -> UploadedFileRecord {
        UploadedFileRecord {
            name: name.to_string(),
            key: format!("uploads/{name}"),
            size: "1 KB".to_string(),
            content_type: "text/plain".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());

        store.append(record("a.txt")).unwrap();
        store.append(record("b.txt")).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a.txt");
        assert_eq!(records[1].name, "b.txt");
    }

    #[test]
    fn test_remove_at_removes_exactly_one() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        store.append(record("a.txt")).unwrap();
        store.append(record("b.txt")).unwrap();
        store.append(record("c.txt")).unwrap();

        let removed = store.remove_at(1).unwrap().unwrap();
        assert_eq!(removed.name, "b.txt");

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "a.txt");
        assert_eq!(records[1].name, "c.txt");
        assert_eq!(records[0].key, "uploads/a.txt");
        assert_eq!(records[1].content_type, "text/plain");
    }

    #[test]
    fn test_remove_at_out_of_range_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        store.append(record("a.txt")).unwrap();

        assert!(store.remove_at(5).unwrap().is_none());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        std::fs::write(store.path(), "not json at all").unwrap();

        assert!(matches!(
            store.load(),
            Err(AppError::CorruptHistory(_))
        ));
    }
}

//! Ledger cache backed by a JSON file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::invoice::InvoiceRecord;
use crate::store::LedgerStore;

/// Stores the ledger at `{dir}/{storage_key}.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        FileStore {
            dir: dir.into(),
            key: key.to_string(),
        }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.ledger_path(), &config.storage_key)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", self.key))
    }

    fn decode(path: &Path, content: &str) -> LedgerResult<Vec<InvoiceRecord>> {
        serde_json::from_str(content).map_err(|e| {
            LedgerError::Store(format!("Could not decode {}: {}", path.display(), e))
        })
    }
}

impl LedgerStore for FileStore {
    fn get(&self) -> LedgerResult<Option<Vec<InvoiceRecord>>> {
        let path = self.path();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Self::decode(&path, &content).map(Some)
    }

    fn set(&self, records: &[InvoiceRecord]) -> LedgerResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let content = serde_json::to_string(records)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;

        // Readers see either the old array or the new one
        let temp = self.temp_path();
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, self.path())?;

        debug!(path = %self.path().display(), records = records.len(), "ledger cache written");
        Ok(())
    }

    fn clear(&self) -> LedgerResult<()> {
        match std::fs::remove_file(self.path()) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{InvoiceStatus, reindex};
    use crate::test_support::make_record;

    #[test]
    fn test_get_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "invoices_vault_db");

        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_get_with_missing_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"), "ledger");

        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_get_after_file_removed_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "ledger");
        store.set(&[make_record("a", 1.0, InvoiceStatus::Paid)]).unwrap();

        std::fs::remove_file(store.path()).unwrap();

        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"), "invoices_vault_db");
        let mut records = vec![
            make_record("a", 100.0, InvoiceStatus::Paid),
            make_record("b", 50.0, InvoiceStatus::Pending),
        ];
        reindex(&mut records);

        store.set(&records).unwrap();

        assert_eq!(store.get().unwrap(), Some(records));
        assert!(dir.path().join("nested/invoices_vault_db.json").exists());
        assert!(!dir.path().join("nested/invoices_vault_db.json.tmp").exists());
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "ledger");

        store
            .set(&[
                make_record("a", 1.0, InvoiceStatus::Paid),
                make_record("b", 2.0, InvoiceStatus::Paid),
            ])
            .unwrap();
        store.set(&[make_record("c", 3.0, InvoiceStatus::Draft)]).unwrap();

        let ids: Vec<_> = store.get().unwrap().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn test_corrupt_cache_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "ledger");
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.get(), Err(LedgerError::Store(_))));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path(), "ledger");
        store.set(&[make_record("a", 1.0, InvoiceStatus::Paid)]).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();

        assert!(store.get().unwrap().is_none());
    }
}

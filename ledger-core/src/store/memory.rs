//! In-memory ledger cache.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{LedgerError, LedgerResult};
use crate::invoice::InvoiceRecord;
use crate::store::LedgerStore;

/// Keeps the serialized ledger in memory.
///
/// The array goes through the same JSON encoding as [`FileStore`](super::FileStore),
/// so a set/get pair exercises the cache format.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw JSON already under the key.
    pub fn with_raw(json: &str) -> Self {
        MemoryStore {
            slot: Mutex::new(Some(json.to_string())),
            writes: AtomicUsize::new(0),
        }
    }

    /// The raw JSON currently stored.
    pub fn raw(&self) -> LedgerResult<Option<String>> {
        Ok(self.lock()?.clone())
    }

    /// Number of `set` calls that have succeeded.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> LedgerResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| LedgerError::Store("memory store lock poisoned".into()))
    }
}

impl LedgerStore for MemoryStore {
    fn get(&self) -> LedgerResult<Option<Vec<InvoiceRecord>>> {
        match self.lock()?.as_deref() {
            Some(json) => serde_json::from_str(json)
                .map(Some)
                .map_err(|e| LedgerError::Store(format!("Could not decode cache: {e}"))),
            None => Ok(None),
        }
    }

    fn set(&self, records: &[InvoiceRecord]) -> LedgerResult<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;
        *self.lock()? = Some(json);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> LedgerResult<()> {
        *self.lock()? = None;
        Ok(())
    }
}

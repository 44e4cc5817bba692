//! Local ledger cache.
//!
//! The cache holds the whole working set as one serialized JSON array under
//! a fixed key. Every write replaces the array wholesale; there is no
//! incremental persistence.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::LedgerResult;
use crate::invoice::InvoiceRecord;

/// Durable storage for the ledger.
pub trait LedgerStore {
    /// Read the cached ledger. `None` when nothing has been stored yet.
    fn get(&self) -> LedgerResult<Option<Vec<InvoiceRecord>>>;

    /// Replace the cached ledger.
    fn set(&self, records: &[InvoiceRecord]) -> LedgerResult<()>;

    /// Remove the cached ledger entirely.
    fn clear(&self) -> LedgerResult<()>;
}

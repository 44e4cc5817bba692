//! Core of the invoice ledger.
//!
//! This crate holds everything below the presentation layer:
//! - `invoice` record types and display-reference indexing
//! - `remote` for the REST collection the ledger is seeded from
//! - `store` for the local cache that shadows the remote
//! - `ledger` for load, add, delete and reset
//! - `summary` for the figures shown alongside the table

pub mod config;
pub mod error;
pub mod invoice;
pub mod ledger;
pub mod normalize;
pub mod remote;
pub mod store;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use invoice::{InvoiceDraft, InvoiceItem, InvoiceRecord, InvoiceStatus};
pub use ledger::{Ledger, LoadSource};
pub use summary::LedgerSummary;

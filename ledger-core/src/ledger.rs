//! The local-first invoice ledger.
//!
//! The ledger owns the in-memory collection and keeps it equal to the
//! cache after every mutation. Loading prefers the cache: the remote is
//! only consulted when the cache is absent or empty, and once seeded the
//! cache shadows the remote until [`Ledger::reset`] clears it.
//!
//! Inserts are remote-confirmed while deletes are local-only. The
//! asymmetry is intentional; deleting never touches the remote.

use chrono::Utc;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::invoice::{InvoiceDraft, InvoiceRecord, reindex};
use crate::normalize::{self, Defaults};
use crate::remote::RemoteSource;
use crate::store::LedgerStore;
use crate::summary::LedgerSummary;

/// Where a load took its records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Cache,
    Remote,
}

pub struct Ledger<R, S> {
    remote: R,
    store: S,
    default_currency: String,
    records: Vec<InvoiceRecord>,
}

impl<R: RemoteSource, S: LedgerStore> Ledger<R, S> {
    pub fn new(remote: R, store: S, config: &LedgerConfig) -> Self {
        Ledger {
            remote,
            store,
            default_currency: config.default_currency.clone(),
            records: Vec::new(),
        }
    }

    /// Current records, in display order.
    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_records(&self.records)
    }

    /// Populate the ledger, from cache when it has records, otherwise from
    /// the remote.
    ///
    /// On any failure the ledger is left empty.
    pub async fn load(&mut self) -> LedgerResult<LoadSource> {
        self.records.clear();

        let cached = self.store.get()?;
        if let Some(records) = cached.filter(|r| !r.is_empty()) {
            debug!(records = records.len(), "adopting cached ledger");
            self.records = records;
            return Ok(LoadSource::Cache);
        }

        debug!("ledger cache empty, seeding from remote");
        let body = self
            .remote
            .fetch_all()
            .await
            .map_err(|e| LedgerError::SyncFailed(e.to_string()))?;

        let defaults = Defaults::new(&self.default_currency);
        let mut records: Vec<InvoiceRecord> = normalize::payload_rows(body)
            .iter()
            .map(|raw| normalize::normalize_record(raw, &defaults))
            .collect();
        reindex(&mut records);

        self.store.set(&records)?;
        info!(records = records.len(), "ledger seeded from remote");
        self.records = records;

        Ok(LoadSource::Remote)
    }

    /// Submit a new invoice to the remote and, once it confirms, prepend it
    /// to the ledger.
    ///
    /// Nothing changes locally until the remote call has succeeded.
    pub async fn add(&mut self, draft: InvoiceDraft) -> LedgerResult<InvoiceRecord> {
        let customer_name = draft.customer_name.trim();
        if customer_name.is_empty() {
            return Err(LedgerError::Validation("Customer name is required".into()));
        }
        let amount = match draft.amount {
            None => return Err(LedgerError::Validation("Amount is required".into())),
            Some(a) if !a.is_finite() || a < 0.0 => {
                return Err(LedgerError::Validation(format!(
                    "Amount must be a non-negative number, got {a}"
                )));
            }
            Some(a) => a,
        };

        let now = Utc::now();
        let body = json!({
            "customerName": customer_name,
            "customerEmail": draft.customer_email.trim(),
            "amount": amount,
            "status": draft.status,
            "date": now.to_rfc3339(),
            "dueDate": now.to_rfc3339(),
            "currency": self.default_currency,
        });

        let created = self
            .remote
            .create(&body)
            .await
            .map_err(|e| LedgerError::SaveFailed(e.to_string()))?;

        let mut merged = normalize::overlay(&body, created);
        ensure_id(&mut merged);
        let defaults = Defaults {
            currency: self.default_currency.clone(),
            now,
        };
        let record = normalize::normalize_record(&merged, &defaults);

        let mut updated = Vec::with_capacity(self.records.len() + 1);
        updated.push(record);
        updated.extend(self.records.iter().cloned());
        reindex(&mut updated);

        self.commit(updated)?;
        info!(id = %self.records[0].id, "invoice committed to ledger");

        Ok(self.records[0].clone())
    }

    /// Remove a record by id. Local only: the remote is not told.
    ///
    /// Returns the removed record, or `None` if no record had that id.
    pub fn delete(&mut self, id: &str) -> LedgerResult<Option<InvoiceRecord>> {
        let mut updated = self.records.clone();
        let removed = updated
            .iter()
            .position(|r| r.id == id)
            .map(|index| updated.remove(index));
        reindex(&mut updated);

        self.commit(updated)?;

        match &removed {
            Some(record) => info!(id = %record.id, "invoice archived"),
            None => warn!(id, "delete of unknown invoice id"),
        }

        Ok(removed)
    }

    /// Drop the cache and the in-memory records so the next load goes to
    /// the remote.
    pub fn reset(&mut self) -> LedgerResult<()> {
        self.store.clear()?;
        self.records.clear();
        info!("ledger cache cleared");
        Ok(())
    }

    /// Write-through, then swap in. A failed write leaves memory untouched.
    fn commit(&mut self, records: Vec<InvoiceRecord>) -> LedgerResult<()> {
        self.store.set(&records)?;
        self.records = records;
        Ok(())
    }
}

/// Give a created record an id if the remote didn't assign one.
fn ensure_id(record: &mut Value) {
    let has_id = match record.get("id") {
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Number(_)) => true,
        _ => false,
    };

    if has_id {
        return;
    }
    if let Value::Object(fields) = record {
        fields.insert("id".to_string(), Value::String(normalize::new_id()));
    }
}

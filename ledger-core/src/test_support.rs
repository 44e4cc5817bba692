//! Shared fixtures for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use crate::error::{LedgerError, LedgerResult};
use crate::invoice::{InvoiceRecord, InvoiceStatus};
use crate::remote::RemoteSource;
use crate::store::{LedgerStore, MemoryStore};

pub fn make_record(id: &str, amount: f64, status: InvoiceStatus) -> InvoiceRecord {
    let date = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
    InvoiceRecord {
        id: id.to_string(),
        invoice_number: String::new(),
        customer_name: "Acme".to_string(),
        customer_email: "billing@acme.test".to_string(),
        amount,
        currency: "USD".to_string(),
        date,
        due_date: date,
        status,
        items: None,
    }
}

/// Scripted remote that counts its calls.
///
/// `create` echoes the submitted body with an id of `remote-{n}`.
pub struct MockRemote {
    rows: Value,
    fail: bool,
    assign_ids: bool,
    fetches: AtomicUsize,
    creates: AtomicUsize,
    bodies: Mutex<Vec<Value>>,
}

impl MockRemote {
    pub fn with_rows(rows: Value) -> Self {
        MockRemote {
            rows,
            fail: false,
            assign_ids: true,
            fetches: AtomicUsize::new(0),
            creates: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        MockRemote {
            fail: true,
            ..Self::with_rows(Value::Null)
        }
    }

    pub fn without_ids(self) -> Self {
        MockRemote {
            assign_ids: false,
            ..self
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn created_bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

impl RemoteSource for MockRemote {
    async fn fetch_all(&self) -> LedgerResult<Value> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LedgerError::Remote("connection refused".into()));
        }
        Ok(self.rows.clone())
    }

    async fn create(&self, body: &Value) -> LedgerResult<Value> {
        let n = self.creates.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(LedgerError::Remote("connection refused".into()));
        }
        self.bodies.lock().unwrap().push(body.clone());

        let mut created = body.clone();
        if self.assign_ids {
            created["id"] = json!(format!("remote-{n}"));
        }
        Ok(created)
    }
}

/// Store that reads from an inner [`MemoryStore`] but rejects every write,
/// like a cache on a full or read-only disk.
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub fn new(inner: MemoryStore) -> Self {
        ReadOnlyStore { inner }
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl LedgerStore for ReadOnlyStore {
    fn get(&self) -> LedgerResult<Option<Vec<InvoiceRecord>>> {
        self.inner.get()
    }

    fn set(&self, _records: &[InvoiceRecord]) -> LedgerResult<()> {
        Err(LedgerError::Store("disk is read-only".into()))
    }

    fn clear(&self) -> LedgerResult<()> {
        Err(LedgerError::Store("disk is read-only".into()))
    }
}

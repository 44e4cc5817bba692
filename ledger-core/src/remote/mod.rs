//! Remote invoice collection.
//!
//! The remote is a plain REST collection: GET lists raw invoice-like
//! objects, POST creates one and echoes it back. Nothing coming back is
//! trusted to be well-formed; callers run it through
//! [`normalize`](crate::normalize) before it reaches the ledger.

mod http;

pub use http::HttpRemote;

use serde_json::Value;

use crate::error::LedgerResult;

/// A source of raw invoice records.
///
/// Each method is exactly one request/response round trip. Implementations
/// do not retry.
#[allow(async_fn_in_trait)]
pub trait RemoteSource {
    /// Fetch the collection body as-is. May be an array, a single object,
    /// or anything else the server decides to send.
    async fn fetch_all(&self) -> LedgerResult<Value>;

    /// Submit a partial invoice and return the created object.
    async fn create(&self, body: &Value) -> LedgerResult<Value>;
}

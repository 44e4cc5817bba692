//! Invoice record types.
//!
//! These are the rows of the ledger as they are cached locally. The JSON
//! layout (camelCase field names) is shared by the cache file and the
//! remote collection, so a cached array can be adopted without conversion.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix of the human-facing display reference.
pub const DISPLAY_REFERENCE_PREFIX: &str = "INV-";

/// A single invoice in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    /// Stable identifier. Never changes once assigned.
    pub id: String,
    /// Display reference (`INV-{n}`), recomputed from position on every
    /// mutation. Not stable across deletes.
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: f64,
    pub currency: String,
    /// Issue date
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InvoiceItem>>,
}

/// One line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: String,
    pub description: String,
    pub quantity: f64,
    pub price: f64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
    Draft,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Overdue,
        InvoiceStatus::Draft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Draft => "Draft",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    /// Case-insensitive match on the status name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvoiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown status '{}'. Expected one of: Paid, Pending, Overdue, Draft",
                    s
                )
            })
    }
}

/// A user-submitted invoice that has not been through the remote yet.
///
/// `amount` is optional so that a missing amount can be reported as a
/// validation error instead of silently becoming zero.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub customer_email: String,
    pub amount: Option<f64>,
    pub status: InvoiceStatus,
}

/// Display reference for a 0-based position in the ledger.
pub fn display_reference(index: usize) -> String {
    format!("{}{}", DISPLAY_REFERENCE_PREFIX, index + 1)
}

/// Rewrite every display reference from current ordering.
pub fn reindex(records: &mut [InvoiceRecord]) {
    for (i, record) in records.iter_mut().enumerate() {
        record.invoice_number = display_reference(i);
    }
}

impl fmt::Display for InvoiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.invoice_number, self.customer_name)
    }
}

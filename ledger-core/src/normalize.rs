//! Normalization of raw remote records.
//!
//! The remote collection is loosely typed: fields can be missing, empty,
//! numbers where strings are expected, or the other way around. Every raw
//! object is turned into a complete [`InvoiceRecord`] by substituting
//! defaults. Normalization never fails; malformed input degrades to
//! defaults rather than being rejected.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::invoice::{DISPLAY_REFERENCE_PREFIX, InvoiceItem, InvoiceRecord, InvoiceStatus};

pub const DEFAULT_CUSTOMER_NAME: &str = "Global Client";
pub const DEFAULT_CUSTOMER_EMAIL: &str = "billing@enterprise.com";

/// Numeric timestamps at or above this are taken as milliseconds.
const MILLIS_THRESHOLD: f64 = 1e11;

/// Values used for fields the remote leaves out.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub currency: String,
    pub now: DateTime<Utc>,
}

impl Defaults {
    pub fn new(currency: &str) -> Self {
        Defaults {
            currency: currency.to_string(),
            now: Utc::now(),
        }
    }
}

/// Shape a GET body into a list of raw rows.
///
/// An array is used as-is, a single object becomes a one-element list,
/// anything else yields no rows.
pub fn payload_rows(body: Value) -> Vec<Value> {
    match body {
        Value::Array(rows) => rows,
        object @ Value::Object(_) => vec![object],
        _ => Vec::new(),
    }
}

/// Build a complete record from a raw object.
///
/// The display reference set here is only a placeholder derived from the
/// id; the ledger re-indexes every record from position afterwards.
pub fn normalize_record(raw: &Value, defaults: &Defaults) -> InvoiceRecord {
    let id = text_field(raw, "id").unwrap_or_else(new_id);

    let invoice_number = text_field(raw, "invoiceNumber").unwrap_or_else(|| {
        let prefix: String = id.chars().take(6).collect();
        format!("{}{}", DISPLAY_REFERENCE_PREFIX, prefix.to_uppercase())
    });

    InvoiceRecord {
        invoice_number,
        customer_name: text_field(raw, "customerName")
            .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string()),
        customer_email: text_field(raw, "customerEmail")
            .unwrap_or_else(|| DEFAULT_CUSTOMER_EMAIL.to_string()),
        amount: amount_field(raw.get("amount")),
        currency: text_field(raw, "currency").unwrap_or_else(|| defaults.currency.clone()),
        date: raw.get("date").and_then(parse_date).unwrap_or(defaults.now),
        due_date: raw.get("dueDate").and_then(parse_date).unwrap_or(defaults.now),
        status: raw
            .get("status")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(InvoiceStatus::Pending),
        items: raw.get("items").and_then(Value::as_array).map(|items| {
            items.iter().map(normalize_item).collect()
        }),
        id,
    }
}

fn normalize_item(raw: &Value) -> InvoiceItem {
    InvoiceItem {
        id: text_field(raw, "id").unwrap_or_else(new_id),
        description: text_field(raw, "description").unwrap_or_default(),
        quantity: amount_field(raw.get("quantity")),
        price: amount_field(raw.get("price")),
    }
}

/// Overlay the object returned by a create call on the body that was
/// submitted, so fields the server doesn't echo keep their submitted value.
pub fn overlay(submitted: &Value, created: Value) -> Value {
    let mut merged: Map<String, Value> = submitted.as_object().cloned().unwrap_or_default();

    if let Value::Object(fields) = created {
        for (key, value) in fields {
            if !value.is_null() {
                merged.insert(key, value);
            }
        }
    }

    Value::Object(merged)
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A non-empty string, or a number rendered as a string.
fn text_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A finite, non-negative number; numeric strings are parsed. Anything
/// else is zero.
fn amount_field(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(a) if a.is_finite() && a >= 0.0 => a,
        _ => 0.0,
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD` (midnight UTC), or a Unix timestamp in
/// seconds or milliseconds.
fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                })
        }
        Value::Number(n) => {
            let ts = n.as_f64()?;
            if !ts.is_finite() {
                return None;
            }
            if ts.abs() >= MILLIS_THRESHOLD {
                DateTime::from_timestamp_millis(ts as i64)
            } else {
                DateTime::from_timestamp(ts as i64, 0)
            }
        }
        _ => None,
    }
}

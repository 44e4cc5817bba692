//! Aggregates over the ledger.

use serde::Serialize;

use crate::invoice::{InvoiceRecord, InvoiceStatus};

/// Headline figures for the ledger. Amounts are summed regardless of
/// currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LedgerSummary {
    /// Sum of every amount
    pub total: f64,
    /// Sum of amounts still Pending
    pub pending: f64,
    pub paid_count: usize,
    pub count: usize,
}

impl LedgerSummary {
    pub fn from_records(records: &[InvoiceRecord]) -> Self {
        records.iter().fold(
            LedgerSummary {
                count: records.len(),
                ..LedgerSummary::default()
            },
            |mut acc, record| {
                acc.total += record.amount;
                match record.status {
                    InvoiceStatus::Pending => acc.pending += record.amount,
                    InvoiceStatus::Paid => acc.paid_count += 1,
                    _ => {}
                }
                acc
            },
        )
    }
}

/// Record count per status, in `InvoiceStatus::ALL` order. Statuses with
/// no records are left out.
pub fn status_breakdown(records: &[InvoiceRecord]) -> Vec<(InvoiceStatus, usize)> {
    InvoiceStatus::ALL
        .into_iter()
        .map(|status| (status, records.iter().filter(|r| r.status == status).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Revenue per month of issue (`Jan`, `Feb`, ...), in the order months are
/// first seen. Records from the same month of different years share a
/// bucket.
pub fn monthly_revenue(records: &[InvoiceRecord]) -> Vec<(String, f64)> {
    let mut months: Vec<(String, f64)> = Vec::new();

    for record in records {
        let month = record.date.format("%b").to_string();
        match months.iter_mut().find(|(name, _)| *name == month) {
            Some((_, amount)) => *amount += record.amount,
            None => months.push((month, record.amount)),
        }
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_record;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_summary_figures() {
        let records = vec![
            make_record("a", 100.0, InvoiceStatus::Paid),
            make_record("b", 50.0, InvoiceStatus::Pending),
            make_record("c", 25.0, InvoiceStatus::Pending),
            make_record("d", 10.0, InvoiceStatus::Overdue),
            make_record("e", 200.0, InvoiceStatus::Paid),
        ];

        let summary = LedgerSummary::from_records(&records);

        assert_eq!(summary.total, 385.0);
        assert_eq!(summary.pending, 75.0);
        assert_eq!(summary.paid_count, 2);
        assert_eq!(summary.count, 5);
    }

    #[test]
    fn test_summary_of_empty_ledger() {
        assert_eq!(LedgerSummary::from_records(&[]), LedgerSummary::default());
    }

    #[test]
    fn test_status_breakdown_skips_empty_statuses() {
        let records = vec![
            make_record("a", 1.0, InvoiceStatus::Draft),
            make_record("b", 1.0, InvoiceStatus::Paid),
            make_record("c", 1.0, InvoiceStatus::Draft),
        ];

        assert_eq!(
            status_breakdown(&records),
            vec![(InvoiceStatus::Paid, 1), (InvoiceStatus::Draft, 2)]
        );
    }

    #[test]
    fn test_monthly_revenue_in_first_seen_order() {
        let mut march = make_record("a", 100.0, InvoiceStatus::Paid);
        march.date = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();
        let mut january = make_record("b", 40.0, InvoiceStatus::Paid);
        january.date = Utc.with_ymd_and_hms(2025, 1, 9, 0, 0, 0).unwrap();
        let mut march_again = make_record("c", 5.0, InvoiceStatus::Pending);
        march_again.date = Utc.with_ymd_and_hms(2024, 3, 30, 0, 0, 0).unwrap();

        let revenue = monthly_revenue(&[march, january, march_again]);

        assert_eq!(
            revenue,
            vec![("Mar".to_string(), 105.0), ("Jan".to_string(), 40.0)]
        );
    }
}

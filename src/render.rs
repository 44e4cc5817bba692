//! TUI rendering for ledger types.
//!
//! Extension traits and helpers that add colored terminal rendering to
//! ledger-core types using owo_colors.

use ledger_core::{InvoiceRecord, InvoiceStatus, LedgerSummary};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the invoice status
fn colorize_status(status: InvoiceStatus, text: &str) -> String {
    match status {
        InvoiceStatus::Paid => text.green().to_string(),
        InvoiceStatus::Pending => text.yellow().to_string(),
        InvoiceStatus::Overdue => text.red().to_string(),
        InvoiceStatus::Draft => text.dimmed().to_string(),
    }
}

impl Render for InvoiceStatus {
    fn render(&self) -> String {
        colorize_status(*self, &self.as_str().to_uppercase())
    }
}

impl Render for InvoiceRecord {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            self.invoice_number.blue().bold(),
            self.customer_name,
            format_amount(self.amount, &self.currency).green(),
            self.status.render()
        )
    }
}

const HEADERS: [&str; 7] = ["REFERENCE", "CLIENT", "EMAIL", "DATE", "TOTAL", "STATUS", "ID"];

/// Render records as an aligned table.
///
/// Cells are padded before they are colored so escape codes don't throw
/// off the column widths.
pub fn render_table(rows: &[&InvoiceRecord]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.invoice_number.clone(),
                r.customer_name.clone(),
                r.customer_email.clone(),
                r.date.format("%b %-d, %Y").to_string(),
                format_amount(r.amount, &r.currency),
                r.status.as_str().to_uppercase(),
                r.id.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:<w$}", h))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(header.trim_end().dimmed().to_string());

    for (row, record) in cells.iter().zip(rows) {
        let padded: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell))
            .collect();

        lines.push(
            [
                padded[0].blue().bold().to_string(),
                padded[1].clone(),
                padded[2].dimmed().to_string(),
                padded[3].dimmed().to_string(),
                padded[4].green().to_string(),
                colorize_status(record.status, &padded[5]),
                padded[6].dimmed().to_string(),
            ]
            .join("  "),
        );
    }

    lines.join("\n")
}

/// The four headline figures shown above the dashboard table.
pub fn render_summary(summary: &LedgerSummary, currency: &str) -> String {
    [
        format!(
            "{}  {}",
            "Total revenue  ".dimmed(),
            format_amount(summary.total, currency).bold()
        ),
        format!(
            "{}  {}",
            "Pending balance".dimmed(),
            format_amount(summary.pending, currency).yellow()
        ),
        format!("{}  {}", "Completed      ".dimmed(), summary.paid_count.green()),
        format!("{}  {}", "Total logs     ".dimmed(), summary.count),
    ]
    .join("\n")
}

/// Format an amount with thousands separators. USD gets a `$` prefix,
/// other currencies a code suffix.
pub fn format_amount(amount: f64, currency: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let number = format!("{}{}.{:02}", sign, grouped, cents % 100);
    if currency.eq_ignore_ascii_case("USD") {
        format!("${number}")
    } else {
        format!("{number} {currency}")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_record(id: &str, reference: &str, status: InvoiceStatus) -> InvoiceRecord {
        let date = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        InvoiceRecord {
            id: id.to_string(),
            invoice_number: reference.to_string(),
            customer_name: "Acme Corporation".to_string(),
            customer_email: "ap@acme.test".to_string(),
            amount: 1234.5,
            currency: "USD".to_string(),
            date,
            due_date: date,
            status,
            items: None,
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "USD"), "$0.00");
        assert_eq!(format_amount(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_amount(1_000_000.0, "usd"), "$1,000,000.00");
        assert_eq!(format_amount(999.999, "EUR"), "1,000.00 EUR");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("invoice", 1), "invoice");
        assert_eq!(pluralize("invoice", 0), "invoices");
        assert_eq!(pluralize("invoice", 3), "invoices");
    }

    #[test]
    fn test_render_table_has_header_and_rows() {
        let a = make_record("a", "INV-1", InvoiceStatus::Paid);
        let b = make_record("b", "INV-2", InvoiceStatus::Overdue);

        let table = render_table(&[&a, &b]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("REFERENCE"));
        assert!(lines[1].contains("INV-1"));
        assert!(lines[1].contains("$1,234.50"));
        assert!(lines[1].contains("Mar 20, 2025"));
        assert!(lines[2].contains("OVERDUE"));
    }

    #[test]
    fn test_render_summary_lists_four_figures() {
        let summary = LedgerSummary {
            total: 150.0,
            pending: 50.0,
            paid_count: 1,
            count: 2,
        };

        let rendered = render_summary(&summary, "USD");

        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.contains("$150.00"));
        assert!(rendered.contains("$50.00"));
    }
}

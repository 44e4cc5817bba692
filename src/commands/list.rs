use anyhow::Result;
use ledger_core::InvoiceStatus;
use owo_colors::OwoColorize;

use super::load;
use crate::AppLedger;
use crate::render::{render_summary, render_table};

pub async fn run(ledger: &mut AppLedger, status: Option<InvoiceStatus>) -> Result<()> {
    load(ledger).await?;

    let rows: Vec<_> = ledger
        .records()
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .collect();

    if rows.is_empty() {
        match status {
            Some(s) => println!("{}", format!("No {} invoices", s).dimmed()),
            None => println!("{}", "No invoices".dimmed()),
        }
        return Ok(());
    }

    println!("{}", render_table(&rows));
    println!();
    println!(
        "{}",
        render_summary(&ledger.summary(), ledger.default_currency())
    );

    Ok(())
}

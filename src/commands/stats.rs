use anyhow::Result;
use ledger_core::summary::{monthly_revenue, status_breakdown};
use owo_colors::OwoColorize;

use super::load;
use crate::AppLedger;
use crate::render::{Render, format_amount, render_summary};

pub async fn run(ledger: &mut AppLedger) -> Result<()> {
    load(ledger).await?;

    println!("{}", render_summary(&ledger.summary(), ledger.default_currency()));

    let breakdown = status_breakdown(ledger.records());
    if !breakdown.is_empty() {
        println!();
        println!("{}", "By status".bold());
        for (status, count) in breakdown {
            println!("   {} {}", status.render(), count);
        }
    }

    let revenue = monthly_revenue(ledger.records());
    if !revenue.is_empty() {
        println!();
        println!("{}", "Monthly revenue".bold());
        for (month, amount) in revenue {
            println!("   {:<4} {}", month, format_amount(amount, ledger.default_currency()));
        }
    }

    Ok(())
}

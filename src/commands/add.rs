use anyhow::Result;
use ledger_core::{InvoiceDraft, InvoiceStatus};
use owo_colors::OwoColorize;

use super::load;
use crate::AppLedger;
use crate::render::render_table;
use crate::utils::tui::create_spinner;

pub async fn run(
    ledger: &mut AppLedger,
    customer_name: String,
    customer_email: String,
    amount: Option<f64>,
    status: InvoiceStatus,
) -> Result<()> {
    load(ledger).await?;

    let draft = InvoiceDraft {
        customer_name,
        customer_email,
        amount,
        status,
    };

    let spinner = create_spinner("Saving invoice".to_string());
    let result = ledger.add(draft).await;
    spinner.finish_and_clear();
    let record = result?;

    println!("{}", "Transaction successfully committed to ledger.".green());
    println!("{}", render_table(&[&record]));

    Ok(())
}

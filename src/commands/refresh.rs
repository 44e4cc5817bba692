use anyhow::Result;
use ledger_core::LoadSource;
use owo_colors::OwoColorize;

use super::load;
use crate::AppLedger;
use crate::render::pluralize;

pub async fn run(ledger: &mut AppLedger) -> Result<()> {
    let source = load(ledger).await?;
    let count = ledger.records().len();

    match source {
        LoadSource::Cache => {
            println!("Loaded {} {} from local cache", count, pluralize("invoice", count));
            println!(
                "{}",
                "   The cache shadows the remote. Run `invledger reset` to re-seed it.".dimmed()
            );
        }
        LoadSource::Remote => {
            println!(
                "{}",
                format!("Synced {} {} from remote", count, pluralize("invoice", count)).green()
            );
        }
    }

    Ok(())
}

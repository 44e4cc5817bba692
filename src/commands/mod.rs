pub mod add;
pub mod delete;
pub mod list;
pub mod refresh;
pub mod reset;
pub mod stats;

use anyhow::Result;
use ledger_core::LoadSource;
use tracing::debug;

use crate::AppLedger;
use crate::utils::tui::create_spinner;

/// Load the ledger behind a spinner. Every command that reads or mutates
/// the ledger starts here.
pub async fn load(ledger: &mut AppLedger) -> Result<LoadSource> {
    let spinner = create_spinner("Loading ledger".to_string());
    let result = ledger.load().await;
    spinner.finish_and_clear();

    let source = result?;
    debug!(?source, records = ledger.records().len(), "ledger loaded");
    Ok(source)
}

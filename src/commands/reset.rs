use anyhow::Result;
use owo_colors::OwoColorize;

use crate::AppLedger;

pub fn run(ledger: &mut AppLedger) -> Result<()> {
    ledger.reset()?;
    println!("{}", "Ledger cache cleared. The next command will sync from remote.".green());
    Ok(())
}

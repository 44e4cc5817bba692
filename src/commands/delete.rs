use anyhow::Result;
use owo_colors::OwoColorize;

use super::load;
use crate::AppLedger;
use crate::render::Render;

pub async fn run(ledger: &mut AppLedger, id: &str) -> Result<()> {
    load(ledger).await?;

    match ledger.delete(id)? {
        Some(record) => {
            println!("{}", "Record archived successfully.".green());
            println!("   {}", record.render());
        }
        None => println!("{}", format!("No invoice with id '{}'", id).yellow()),
    }

    Ok(())
}

mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ledger_core::remote::HttpRemote;
use ledger_core::store::FileStore;
use ledger_core::{InvoiceStatus, Ledger, LedgerConfig};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

/// The ledger as wired up for the CLI: REST remote, JSON file cache.
pub type AppLedger = Ledger<HttpRemote, FileStore>;

#[derive(Parser)]
#[command(name = "invledger")]
#[command(about = "Browse and edit your local-first invoice ledger")]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the ledger as a table
    List {
        /// Only show invoices with this status
        #[arg(short, long)]
        status: Option<InvoiceStatus>,
    },
    /// Load the ledger and report where it came from
    Refresh,
    /// Create an invoice on the remote and add it to the ledger
    Add {
        /// Customer name (required)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Customer email
        #[arg(short, long, default_value = "")]
        email: String,

        /// Amount (required)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,

        /// Initial status
        #[arg(short, long, default_value_t = InvoiceStatus::Pending)]
        status: InvoiceStatus,
    },
    /// Remove an invoice from the local ledger by id
    Delete { id: String },
    /// Show totals, status breakdown and monthly revenue
    Stats,
    /// Clear the local cache so the next load seeds from the remote
    Reset,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("{}", format!("{e:#}").red());
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    let config = LedgerConfig::load()?;
    let mut ledger = open_ledger(&config);

    match command {
        Commands::List { status } => commands::list::run(&mut ledger, status).await,
        Commands::Refresh => commands::refresh::run(&mut ledger).await,
        Commands::Add {
            name,
            email,
            amount,
            status,
        } => commands::add::run(&mut ledger, name, email, amount, status).await,
        Commands::Delete { id } => commands::delete::run(&mut ledger, &id).await,
        Commands::Stats => commands::stats::run(&mut ledger).await,
        Commands::Reset => commands::reset::run(&mut ledger),
    }
}

fn open_ledger(config: &LedgerConfig) -> AppLedger {
    Ledger::new(
        HttpRemote::from_config(config),
        FileStore::from_config(config),
        config,
    )
}

/// Logs go to stderr so table output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! Ledger configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

static DEFAULT_API_BASE_URL: &str = "https://6952db36a319a928023a2686.mockapi.io";
static DEFAULT_COLLECTION: &str = "ivoces";
static DEFAULT_STORAGE_KEY: &str = "invoices_vault_db";
static DEFAULT_LEDGER_DIR: &str = "~/.invledger";
static DEFAULT_CURRENCY: &str = "USD";

/// Prefix for environment variable overrides, e.g. `INVLEDGER_API_BASE_URL`.
const ENV_PREFIX: &str = "INVLEDGER";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_ledger_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_DIR)
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// Global configuration at ~/.config/invledger/config.toml
///
/// Built once at startup and handed to the remote client and the cache
/// store; nothing reads it from a global.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LedgerConfig {
    /// Base URL of the REST API serving the invoice collection.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Collection path under the base URL.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Fixed key the cached ledger is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory holding the cache file. `~` is expanded.
    #[serde(default = "default_ledger_dir")]
    pub ledger_dir: PathBuf,

    /// Currency used when a record or a new invoice doesn't name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            api_base_url: default_api_base_url(),
            collection: default_collection(),
            storage_key: default_storage_key(),
            ledger_dir: default_ledger_dir(),
            default_currency: default_currency(),
        }
    }
}

impl LedgerConfig {
    pub fn config_path() -> LedgerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LedgerError::Config("Could not determine config directory".into()))?
            .join("invledger");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> LedgerResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit file, with `INVLEDGER_*` environment
    /// variables taking precedence over file values.
    pub fn load_from(path: &Path) -> LedgerResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| LedgerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LedgerError::Config(e.to_string()))
    }

    /// Directory holding the cache, with `~` expanded.
    pub fn ledger_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.ledger_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Full URL of the invoice collection endpoint.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.collection.trim_start_matches('/')
        )
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LedgerResult<()> {
        let contents = format!(
            "\
# invledger configuration

# REST API serving the invoice collection:
# api_base_url = \"{DEFAULT_API_BASE_URL}\"
# collection = \"{DEFAULT_COLLECTION}\"

# Where the local ledger cache lives:
# ledger_dir = \"{DEFAULT_LEDGER_DIR}\"
# storage_key = \"{DEFAULT_STORAGE_KEY}\"

# Currency for records that don't name one:
# default_currency = \"{DEFAULT_CURRENCY}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LedgerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

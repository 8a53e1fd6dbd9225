//! Configuration for inventa.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file means
//! defaults, so the tool works without running `inventa init` first.
//!
//! ## Layout
//!
//! ```json
//! {
//!   "database": {
//!     "file_name": "inventa.db",
//!     "upgrade_policy": "drop_and_recreate"
//!   }
//! }
//! ```
//!
//! The `INVENTA_DB_PATH` environment variable overrides the database location
//! entirely; `.env` files are honoured because `main` loads them first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use inventa::db::db::Db;
//! use inventa::db::migrations::UpgradePolicy;
//! use inventa::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.database.upgrade_policy = UpgradePolicy::Refuse;
//! config.save()?;
//!
//! let db = Db::from_config(&config.database)?;
//! println!("database at {}", config.database.path()?.display());
//! db.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::{DbOptions, DB_FILE_NAME};
use crate::db::migrations::{UpgradePolicy, SCHEMA_VERSION};
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding an explicit database path.
pub const DB_PATH_ENV: &str = "INVENTA_DB_PATH";

/// Where the store lives and how it reacts to schema changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// File name inside the data directory. Ignored when `INVENTA_DB_PATH` is set.
    pub file_name: String,

    /// Policy applied when the file carries an older schema version.
    ///
    /// Defaults to dropping and recreating the tables, which discards every
    /// stored record.
    #[serde(default)]
    pub upgrade_policy: UpgradePolicy,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DB_FILE_NAME.to_string(),
            upgrade_policy: UpgradePolicy::default(),
        }
    }
}

impl DatabaseConfig {
    /// Resolves the database path, honouring `INVENTA_DB_PATH`.
    pub fn path(&self) -> io::Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        DataStorage::new().get_path(&self.file_name)
    }

    pub fn options(&self) -> DbOptions {
        DbOptions {
            version: SCHEMA_VERSION,
            policy: self.upgrade_policy,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads `config.json`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup, starting from the current configuration.
    ///
    /// Returns the edited configuration; the caller decides whether to save it.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        config.database.file_name = Input::<String>::with_theme(&theme)
            .with_prompt(Message::ConfigPromptFileName.to_string())
            .default(config.database.file_name.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err(Message::EmptyName.to_string())
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let current = UpgradePolicy::ALL
            .iter()
            .position(|policy| *policy == config.database.upgrade_policy)
            .unwrap_or(0);
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::ConfigPromptUpgradePolicy.to_string())
            .items(&UpgradePolicy::ALL[..])
            .default(current)
            .interact()?;
        config.database.upgrade_policy = UpgradePolicy::ALL[selection];

        Ok(config)
    }
}

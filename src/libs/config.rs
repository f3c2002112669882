//! Configuration management for taskroll.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]. A missing file is not an error: the
//! defaults are used, which keeps a first run free of setup.
//!
//! ## Database Location
//!
//! The database path is resolved in this order:
//!
//! 1. The `TASKROLL_DB` environment variable
//! 2. The `database` field of `config.json`
//! 3. `taskroll.db` in the data directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskroll::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! println!("Database: {}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "taskroll.db";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "TASKROLL_DB";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Database file path. Falls back to [`DB_FILE_NAME`] in the data
    /// directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Config {
    /// Loads the configuration, returning defaults when no file exists.
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

    /// Resolves the database file path.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        match self.database.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();
        let default_path = match &config.database {
            Some(path) => path.clone(),
            None => DataStorage::new().get_path(DB_FILE_NAME)?.to_string_lossy().into_owned(),
        };

        msg_print!(Message::ConfigModuleDatabase);
        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(default_path)
            .interact_text()?;

        Ok(Config {
            database: Some(database.trim().to_string()).filter(|path| !path.is_empty()),
        })
    }
}

use anyhow::Result;
use std::env::{consts::OS, var};
use std::fs;
use std::path::PathBuf;

pub const VENDOR_NAME: &str = "taskroll";
pub const APP_NAME: &str = "taskroll";

/// Platform data directory holding the database and `config.json`:
///
/// - Windows: `%LOCALAPPDATA%\taskroll\taskroll`
/// - macOS: `~/Library/Application Support/taskroll/taskroll`
/// - elsewhere: `~/.local/share/taskroll/taskroll`
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

fn platform_root() -> PathBuf {
    let env_or_cwd = |key: &str| PathBuf::from(var(key).unwrap_or_else(|_| ".".into()));
    match OS {
        "windows" => env_or_cwd("LOCALAPPDATA"),
        "macos" => env_or_cwd("HOME").join("Library").join("Application Support"),
        _ => env_or_cwd("HOME").join(".local").join("share"),
    }
}

impl DataStorage {
    pub fn new() -> Self {
        Self {
            base_path: platform_root().join(VENDOR_NAME).join(APP_NAME),
        }
    }

    /// Returns the path of `file_name` inside the data directory, creating
    /// the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

//! CLI configuration management.
//!
//! Resolution order for the database location: `--db` flag, `SEGUE_DB`
//! environment variable (a `.env` file is honored), config file, then the
//! platform data directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite transition log.
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let db_path = ProjectDirs::from("dev", "segue", "sg")
            .map(|dirs| dirs.data_dir().join("transitions.db"))
            .unwrap_or_else(|| std::env::temp_dir().join("segue").join("transitions.db"));
        Self { db_path }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path).with_context(|| {
                    format!("Failed to read config from {}", config_path.display())
                })?;
                config = serde_json::from_str(&contents)
                    .with_context(|| "Failed to parse config file")?;
            }
        }

        // Env var takes precedence over the file
        if let Ok(db) = std::env::var("SEGUE_DB") {
            config.db_path = PathBuf::from(db);
        }

        Ok(config)
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "segue", "sg").map(|dirs| dirs.config_dir().join("config.json"))
    }
}

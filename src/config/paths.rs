//! Path management for fin
//!
//! ## Path Resolution Order
//!
//! 1. `FIN_CLI_DATA_DIR` environment variable (if set)
//! 2. `~/.fin-cli` in the user's home directory

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::FinError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FIN_CLI_DATA_DIR";

/// Manages all paths used by fin
#[derive(Debug, Clone)]
pub struct FinPaths {
    /// Base directory for all fin data
    base_dir: PathBuf,
}

impl FinPaths {
    /// Create a new FinPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.fin-cli/ or the override)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("fin.db")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, FinError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| FinError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(".fin-cli"))
}

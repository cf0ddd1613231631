//! User settings for fin
//!
//! Manages user preferences: CSV delimiter, default categories and the
//! currency symbol used in table display.

use serde::{Deserialize, Serialize};

use super::paths::FinPaths;
use crate::error::FinError;
use crate::models::TransactionType;

/// User settings for fin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Delimiter used for CSV import and export
    #[serde(default = "default_delimiter")]
    pub csv_delimiter: String,

    /// Category used when an expense is recorded without one
    #[serde(default = "default_expense_category")]
    pub default_expense_category: String,

    /// Category used when income is recorded without one
    #[serde(default = "default_income_category")]
    pub default_income_category: String,

    /// Currency symbol for table display (never written to CSV)
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_delimiter() -> String {
    ";".to_string()
}

fn default_expense_category() -> String {
    "general".to_string()
}

fn default_income_category() -> String {
    "work".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_delimiter: default_delimiter(),
            default_expense_category: default_expense_category(),
            default_income_category: default_income_category(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Default category for a transaction type
    pub fn default_category(&self, kind: TransactionType) -> &str {
        match kind {
            TransactionType::Income => &self.default_income_category,
            TransactionType::Expense => &self.default_expense_category,
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinPaths) -> Result<Self, FinError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FinError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinPaths) -> Result<(), FinError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Convert a user-supplied delimiter into the single byte the CSV codec needs
pub fn parse_delimiter(raw: &str) -> Result<u8, FinError> {
    match raw.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(FinError::Validation(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            raw
        ))),
    }
}

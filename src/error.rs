//! Custom error types for fin
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Admission errors (amount, date, category) are distinct variants so that
//! bulk import can record exactly why each row was skipped.

use thiserror::Error;

/// The main error type for fin operations
#[derive(Error, Debug)]
pub enum FinError {
    /// Amount did not parse as a positive, finite decimal
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Date is not a real calendar date in YYYY-MM-DD form
    #[error("Invalid date: '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// No category of the requested type has this name
    #[error("Category '{0}' does not exist")]
    UnknownCategory(String),

    /// The category exists but has been disabled
    #[error("Category '{0}' is disabled")]
    DisabledCategory(String),

    /// A category with this name is already registered
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import source is structurally unusable (too short, missing headers)
    #[error("Malformed CSV source: {0}")]
    MalformedSource(String),

    /// Generic validation errors (arguments, ranges, delimiters)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// SQLite errors
    #[error("Database error: {0}")]
    Database(String),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from validating a candidate transaction
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidDate(_)
                | Self::UnknownCategory(_)
                | Self::DisabledCategory(_)
                | Self::Validation(_)
        )
    }

    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "InvalidAmount",
            Self::InvalidDate(_) => "InvalidDate",
            Self::UnknownCategory(_) => "UnknownCategory",
            Self::DisabledCategory(_) => "DisabledCategory",
            Self::DuplicateCategory(_) => "DuplicateCategory",
            Self::NotFound { .. } => "NotFound",
            Self::MalformedSource(_) => "MalformedSource",
            Self::Validation(_) => "Validation",
            Self::Config(_) => "Config",
            Self::Io(_) => "Io",
            Self::Json(_) => "Json",
            Self::Database(_) => "Database",
            Self::Csv(_) => "Csv",
            Self::Export(_) => "Export",
        }
    }
}

impl From<std::io::Error> for FinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for FinError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<csv::Error> for FinError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for fin operations
pub type FinResult<T> = Result<T, FinError>;

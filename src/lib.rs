//! fin - personal finance ledger for the terminal
//!
//! This library records income and expense transactions against a registry
//! of categories, imports them in bulk from CSV, and summarizes them over
//! date ranges.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Categories, transactions, ids and date ranges
//! - `storage`: SQLite schema and repositories
//! - `services`: Validation, registry rules, import and aggregation
//! - `export`: CSV summary export
//! - `display`: Terminal tables
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fin::config::FinPaths;
//! use fin::models::TransactionType;
//! use fin::services::TransactionService;
//! use fin::storage::Storage;
//!
//! let storage = Storage::open(&FinPaths::new()?)?;
//! storage.initialize()?;
//! TransactionService::new(&storage).admit(TransactionType::Expense, "12.50", "groceries", "2024-01-15")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinError, FinResult};

//! Core data models for fin
//!
//! This module contains the data structures of the ledger domain:
//! categories, transactions, their synthetic ids and date ranges.

pub mod category;
pub mod ids;
pub mod period;
pub mod transaction;

pub use category::{Category, DefaultCategory};
pub use ids::{CategoryId, TransactionId};
pub use period::DateRange;
pub use transaction::{NewTransaction, Transaction, TransactionType};

//! Storage layer for fin
//!
//! A single SQLite database holds the `transactions` and `categories` tables.
//! `Storage` owns the connection; repositories borrow it for the duration of
//! one operation.

pub mod categories;
pub mod init;
pub mod transactions;

pub use categories::CategoryRepository;
pub use init::initialize_schema;
pub use transactions::{TransactionQuery, TransactionRepository};

use rusqlite::Connection;
use tracing::debug;

use crate::config::paths::FinPaths;
use crate::error::FinError;

/// Main storage handle, constructed once per process
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (creating if needed) the database under the configured data directory
    pub fn open(paths: &FinPaths) -> Result<Self, FinError> {
        paths.ensure_directories()?;

        let db_path = paths.database_file();
        debug!(path = %db_path.display(), "opening ledger database");
        let conn = Connection::open(&db_path)?;

        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self, FinError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Create tables and seed default categories; safe to call on every startup
    pub fn initialize(&self) -> Result<(), FinError> {
        initialize_schema(&self.conn)
    }

    /// Category registry
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    /// Transaction ledger
    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(&self.conn)
    }
}

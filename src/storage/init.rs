//! Storage initialization
//!
//! Handles schema creation and default category seeding. Every statement is
//! idempotent so this runs on each startup.

use rusqlite::{params, Connection};
use tracing::debug;

use crate::error::FinError;
use crate::models::DefaultCategory;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL CHECK(type IN ('income', 'expense')),
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        date TEXT NOT NULL,
        createdAt TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        type TEXT NOT NULL CHECK(type IN ('income', 'expense')),
        disabled INTEGER NOT NULL DEFAULT 0
    );
";

/// Create both tables and seed the default categories
pub fn initialize_schema(conn: &Connection) -> Result<(), FinError> {
    conn.execute_batch(SCHEMA)?;
    seed_default_categories(conn)?;
    Ok(())
}

/// Insert the default categories, ignoring any that already exist
fn seed_default_categories(conn: &Connection) -> Result<(), FinError> {
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO categories (name, type) VALUES (?1, ?2)")?;

    let mut seeded = 0;
    for default in DefaultCategory::all() {
        seeded += stmt.execute(params![default.name(), default.kind()])?;
    }

    if seeded > 0 {
        debug!(count = seeded, "seeded default categories");
    }

    Ok(())
}

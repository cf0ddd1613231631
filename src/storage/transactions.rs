//! Transaction repository
//!
//! Append-only access to the `transactions` table. There is no
//! update or delete.

use chrono::{NaiveDate, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::error::FinError;
use crate::models::{DateRange, NewTransaction, Transaction, TransactionId};

/// Filter for ledger queries
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    /// Inclusive on both ends
    pub range: DateRange,
    /// Category names to keep; empty keeps everything
    pub categories: Vec<String>,
}

impl TransactionQuery {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            categories: Vec::new(),
        }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(DateRange { start, end })
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Repository for ledger persistence
pub struct TransactionRepository<'a> {
    conn: &'a Connection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Append a validated transaction, returning its new id
    pub fn append(&self, txn: &NewTransaction) -> Result<TransactionId, FinError> {
        self.conn.execute(
            "INSERT INTO transactions (type, amount, category, date, createdAt)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![txn.kind, txn.amount, txn.category, txn.date, Utc::now()],
        )?;

        Ok(TransactionId::new(self.conn.last_insert_rowid()))
    }

    /// Transactions within the query's date range, in insertion order
    pub fn query(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, FinError> {
        let mut sql = String::from(
            "SELECT id, type, amount, category, date, createdAt FROM transactions
             WHERE date >= ?1 AND date <= ?2",
        );
        let mut values = vec![
            Value::Text(query.range.start.format("%Y-%m-%d").to_string()),
            Value::Text(query.range.end.format("%Y-%m-%d").to_string()),
        ];

        if !query.categories.is_empty() {
            let placeholders: Vec<String> = (0..query.categories.len())
                .map(|i| format!("?{}", i + 3))
                .collect();
            sql.push_str(&format!(" AND category IN ({})", placeholders.join(",")));
            values.extend(query.categories.iter().cloned().map(Value::Text));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), transaction_from_row)?;
        let transactions = rows.collect::<Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Number of stored transactions
    pub fn count(&self) -> Result<usize, FinError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: row.get(0)?,
        kind: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}

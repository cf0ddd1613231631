//! Transaction service
//!
//! Single-entry admission and ledger queries. Admission runs every check
//! before writing, so a rejected transaction leaves no trace.

use chrono::NaiveDate;
use tracing::info;

use crate::error::FinResult;
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionType};
use crate::services::validation::{resolve_category, validate_amount, validate_date};
use crate::storage::{Storage, TransactionQuery};

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and admit one transaction
    ///
    /// Checks run in order amount, category, date; the first failure is
    /// returned and nothing is written.
    pub fn admit(
        &self,
        kind: TransactionType,
        amount: &str,
        category: &str,
        date: &str,
    ) -> FinResult<(TransactionId, NewTransaction)> {
        let amount = validate_amount(amount)?;
        let category = resolve_category(&self.storage.categories(), category, kind)?;
        let date = validate_date(date)?;

        let candidate = NewTransaction::new(kind, amount, category.name, date);
        let id = self.append(&candidate)?;

        Ok((id, candidate))
    }

    /// Append an already validated transaction
    pub fn append(&self, candidate: &NewTransaction) -> FinResult<TransactionId> {
        let id = self.storage.transactions().append(candidate)?;
        info!(
            id = %id,
            kind = %candidate.kind,
            amount = candidate.amount,
            category = %candidate.category,
            date = %candidate.date,
            "admitted transaction"
        );
        Ok(id)
    }

    /// Transactions matching the query, in insertion order
    pub fn query(&self, query: &TransactionQuery) -> FinResult<Vec<Transaction>> {
        self.storage.transactions().query(query)
    }

    /// Convenience for an unfiltered inclusive range
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> FinResult<Vec<Transaction>> {
        self.query(&TransactionQuery::between(start, end))
    }
}

//! Summary aggregation
//!
//! Folds a set of transactions into per-category income/expense totals plus
//! a grand total. Sums are kept at full precision; rounding to cents happens
//! only in `format_amount`, at presentation time.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Transaction, TransactionType};

/// Label of the synthesized grand-total row
pub const TOTAL_LABEL: &str = "TOTAL";

/// Totals for one category (or the grand total)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub category: String,
    pub income: f64,
    pub expense: f64,
}

impl SummaryRow {
    fn empty(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            income: 0.0,
            expense: 0.0,
        }
    }

    fn add(&mut self, kind: TransactionType, amount: f64) {
        match kind {
            TransactionType::Income => self.income += amount,
            TransactionType::Expense => self.expense += amount,
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Per-category totals in order of first appearance, plus the total row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub total: SummaryRow,
}

impl Summary {
    /// Category rows followed by the total row
    pub fn all_rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().chain(std::iter::once(&self.total))
    }

    /// Totals for one category, if it appeared
    pub fn category(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.category == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregate transactions by category
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut rows: Vec<SummaryRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = SummaryRow::empty(TOTAL_LABEL);

    for txn in transactions {
        let slot = *index.entry(txn.category.as_str()).or_insert_with(|| {
            rows.push(SummaryRow::empty(txn.category.as_str()));
            rows.len() - 1
        });
        rows[slot].add(txn.kind, txn.amount);
        total.add(txn.kind, txn.amount);
    }

    Summary { rows, total }
}

/// Two-decimal rendering shared by table display and CSV export
///
/// Halves round away from zero (`1.125` renders as `1.13`).
pub fn format_amount(value: f64) -> String {
    // Avoid "-0.00" for values that round to zero
    if value.abs() < 0.005 {
        return "0.00".to_string();
    }
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

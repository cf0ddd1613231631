//! Category model
//!
//! Categories are created explicitly and can only be disabled afterwards;
//! they are never renamed or deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// A named income or expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// Unique, case-sensitive
    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default)]
    pub disabled: bool,
}

impl Category {
    /// Whether new transactions may reference this category
    pub fn is_active(&self) -> bool {
        !self.disabled
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active() {
            "Active"
        } else {
            "Disabled"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Categories seeded on first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    General,
    Utilities,
    Groceries,
    Home,
    Transportation,
    Entertainment,
    Outings,
    Insurance,
    Work,
}

impl DefaultCategory {
    /// All defaults in seeding order
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Utilities,
            Self::Groceries,
            Self::Home,
            Self::Transportation,
            Self::Entertainment,
            Self::Outings,
            Self::Insurance,
            Self::Work,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Utilities => "utilities",
            Self::Groceries => "groceries",
            Self::Home => "home",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Outings => "outings",
            Self::Insurance => "insurance",
            Self::Work => "work",
        }
    }

    pub fn kind(&self) -> TransactionType {
        match self {
            Self::Work => TransactionType::Income,
            _ => TransactionType::Expense,
        }
    }
}

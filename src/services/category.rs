//! Category service
//!
//! Provides the registry rules on top of the category repository: unique
//! names on creation and one-way disabling.

use tracing::info;

use crate::error::{FinError, FinResult};
use crate::models::{Category, TransactionType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List categories in insertion order, optionally filtered by type
    pub fn list(&self, kind: Option<TransactionType>) -> FinResult<Vec<Category>> {
        self.storage.categories().list(kind)
    }

    /// Register a new category
    pub fn add(&self, name: &str, kind: TransactionType) -> FinResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinError::Validation("Category name cannot be empty".into()));
        }

        let categories = self.storage.categories();
        if categories.get_by_name(name)?.is_some() {
            return Err(FinError::DuplicateCategory(name.to_string()));
        }

        let category = categories.insert(name, kind)?;
        info!(name = %category.name, kind = %kind, "added category");

        Ok(category)
    }

    /// Disable a category; disabling twice is not an error
    pub fn disable(&self, name: &str) -> FinResult<Category> {
        let name = name.trim();
        let categories = self.storage.categories();
        if categories.set_disabled(name)? == 0 {
            return Err(FinError::category_not_found(name));
        }
        info!(name, "disabled category");

        categories
            .get_by_name(name)?
            .ok_or_else(|| FinError::category_not_found(name))
    }

    /// Whether a category is disabled; unknown names report `false`
    pub fn is_disabled(&self, name: &str) -> FinResult<bool> {
        self.storage.categories().is_disabled(name)
    }
}

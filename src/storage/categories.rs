//! Category repository
//!
//! Manages the `categories` table. Names are unique and case-sensitive;
//! rows are only ever inserted or flipped to disabled.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use crate::error::FinError;
use crate::models::{Category, CategoryId, TransactionType};

const SELECT_COLUMNS: &str = "SELECT id, name, type, disabled FROM categories";

/// Repository for category persistence
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List categories in insertion order, optionally restricted to one type
    pub fn list(&self, kind: Option<TransactionType>) -> Result<Vec<Category>, FinError> {
        let categories = match kind {
            Some(kind) => {
                let mut stmt = self
                    .conn
                    .prepare(&format!("{} WHERE type = ?1 ORDER BY id", SELECT_COLUMNS))?;
                let rows = stmt.query_map(params![kind], category_from_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
                let rows = stmt.query_map([], category_from_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(categories)
    }

    /// Get a category by exact name
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, FinError> {
        let category = self
            .conn
            .query_row(
                &format!("{} WHERE name = ?1", SELECT_COLUMNS),
                params![name],
                category_from_row,
            )
            .optional()?;

        Ok(category)
    }

    /// Insert a new enabled category
    ///
    /// A UNIQUE violation on `name` is reported as `DuplicateCategory`.
    pub fn insert(&self, name: &str, kind: TransactionType) -> Result<Category, FinError> {
        self.conn
            .execute(
                "INSERT INTO categories (name, type) VALUES (?1, ?2)",
                params![name, kind],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(ref err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    FinError::DuplicateCategory(name.to_string())
                }
                other => FinError::from(other),
            })?;

        Ok(Category {
            id: CategoryId::new(self.conn.last_insert_rowid()),
            name: name.to_string(),
            kind,
            disabled: false,
        })
    }

    /// Set the disabled flag; returns the number of rows matched
    pub fn set_disabled(&self, name: &str) -> Result<usize, FinError> {
        let changed = self.conn.execute(
            "UPDATE categories SET disabled = 1 WHERE name = ?1",
            params![name],
        )?;
        Ok(changed)
    }

    /// Whether a category is disabled; unknown names are not disabled
    pub fn is_disabled(&self, name: &str) -> Result<bool, FinError> {
        let disabled: Option<bool> = self
            .conn
            .query_row(
                "SELECT disabled FROM categories WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        Ok(disabled.unwrap_or(false))
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        disabled: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::init::initialize_schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_list_in_insertion_order() {
        let conn = setup();
        let repo = CategoryRepository::new(&conn);

        let names: Vec<_> = repo
            .list(Some(TransactionType::Expense))
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("general"));
        assert_eq!(names.last().map(String::as_str), Some("insurance"));

        let income = repo.list(Some(TransactionType::Income)).unwrap();
        assert_eq!(income.len(), 1);
        assert_eq!(income[0].name, "work");
    }

    #[test]
    fn test_insert_and_lookup() {
        let conn = setup();
        let repo = CategoryRepository::new(&conn);

        let created = repo.insert("Pets", TransactionType::Expense).unwrap();
        let found = repo.get_by_name("Pets").unwrap().unwrap();
        assert_eq!(created, found);
        assert_eq!(found.id, created.id);

        // Case-sensitive
        assert!(repo.get_by_name("pets").unwrap().is_none());
    }

    #[test]
    fn test_insert_duplicate_maps_error() {
        let conn = setup();
        let repo = CategoryRepository::new(&conn);

        let result = repo.insert("groceries", TransactionType::Income);
        assert!(matches!(result, Err(FinError::DuplicateCategory(name)) if name == "groceries"));
    }

    #[test]
    fn test_disable_and_is_disabled() {
        let conn = setup();
        let repo = CategoryRepository::new(&conn);

        assert!(!repo.is_disabled("home").unwrap());
        assert_eq!(repo.set_disabled("home").unwrap(), 1);
        assert!(repo.is_disabled("home").unwrap());

        // Matching an already-disabled row still counts
        assert_eq!(repo.set_disabled("home").unwrap(), 1);
        assert_eq!(repo.set_disabled("nope").unwrap(), 0);
        assert!(!repo.is_disabled("nope").unwrap());
    }
}

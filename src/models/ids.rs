//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are synthetic SQLite rowids. Wrapping them prevents mixing up a
//! category id with a transaction id at compile time.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw rowid
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the underlying rowid
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.0))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(TransactionId::new(42).to_string(), "txn-42");
        assert_eq!(CategoryId::new(7).to_string(), "cat-7");
    }

    #[test]
    fn test_id_ordering_follows_rowid() {
        assert!(TransactionId::new(1) < TransactionId::new(2));
        assert_eq!(TransactionId::from(5).value(), 5);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = CategoryId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}

//! Service layer for fin
//!
//! The service layer provides business logic on top of the storage layer:
//! validation before admission, the category registry rules, bulk import
//! and summary aggregation.

pub mod category;
pub mod import;
pub mod summary;
pub mod transaction;
pub mod validation;

pub use category::CategoryService;
pub use import::{parse_source, ImportReport, ImportRow, ImportService, SkippedRow};
pub use summary::{summarize, Summary, SummaryRow, TOTAL_LABEL};
pub use transaction::TransactionService;
pub use validation::{resolve_category, validate_amount, validate_date};

//! Display formatting for terminal output
//!
//! Renders categories and summaries as tables with tabled.

pub mod category;
pub mod summary;

pub use category::format_category_tables;
pub use summary::{format_import_report, format_summary_table};

//! Export module for fin
//!
//! Writes summaries as delimiter-separated text.

pub mod csv;

pub use self::csv::{export_summary_file, write_summary_csv, SUMMARY_HEADER};

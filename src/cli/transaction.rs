//! Income and expense CLI commands
//!
//! Both commands either record a single transaction or import a CSV file.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::settings::{parse_delimiter, Settings};
use crate::display::format_import_report;
use crate::error::{FinError, FinResult};
use crate::models::TransactionType;
use crate::services::summary::format_amount;
use crate::services::{ImportService, TransactionService};
use crate::storage::Storage;

/// Arguments shared by `fin income` and `fin expense`
#[derive(Args, Debug)]
pub struct TransactionArgs {
    /// Amount (positive decimal, e.g. "12.50")
    #[arg(
        allow_hyphen_values = true,
        required_unless_present = "file",
        conflicts_with = "file"
    )]
    pub amount: Option<String>,

    /// Category name (defaults to the configured default category)
    #[arg(short, long, conflicts_with = "file")]
    pub category: Option<String>,

    /// Transaction date (YYYY-MM-DD, defaults to today)
    #[arg(short, long, conflicts_with = "file")]
    pub date: Option<String>,

    /// Import transactions from a CSV file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// CSV delimiter (defaults to the configured delimiter)
    #[arg(long, requires = "file")]
    pub delimiter: Option<String>,
}

/// Handle `fin income` / `fin expense`
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    kind: TransactionType,
    args: TransactionArgs,
) -> FinResult<()> {
    if let Some(file) = args.file {
        let delimiter = parse_delimiter(args.delimiter.as_deref().unwrap_or(&settings.csv_delimiter))?;
        let report = ImportService::new(storage).import_file(&file, delimiter, kind)?;
        print!("{}", format_import_report(&report, kind, &file.display().to_string()));
        return Ok(());
    }

    let amount = args
        .amount
        .ok_or_else(|| FinError::Validation("amount is required".into()))?;
    let category = args
        .category
        .unwrap_or_else(|| settings.default_category(kind).to_string());
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let (_, admitted) = TransactionService::new(storage).admit(kind, &amount, &category, &date)?;

    println!(
        "✓ {} recorded: {}{} in {} on {}",
        kind.label(),
        settings.currency_symbol,
        format_amount(admitted.amount),
        admitted.category,
        admitted.date
    );

    Ok(())
}

//! Summary CLI command
//!
//! Resolves the requested period, queries the ledger and either prints a
//! table or writes a CSV export.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::settings::{parse_delimiter, Settings};
use crate::display::format_summary_table;
use crate::error::{FinError, FinResult};
use crate::export::export_summary_file;
use crate::models::DateRange;
use crate::services::{summarize, TransactionService};
use crate::services::validation::validate_date;
use crate::storage::{Storage, TransactionQuery};

/// Arguments for `fin summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Summarize the previous calendar month
    #[arg(short, long, conflicts_with_all = ["year", "start", "end"])]
    pub prev: bool,

    /// Summarize a whole calendar year (YYYY)
    #[arg(short, long, conflicts_with_all = ["start", "end"])]
    pub year: Option<i32>,

    /// Start date (YYYY-MM-DD, defaults to the first of the current month)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Only include these categories (comma-separated)
    #[arg(short, long)]
    pub categories: Option<String>,

    /// Export to a CSV file instead of printing a table
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// CSV delimiter (defaults to the configured delimiter)
    #[arg(long, requires = "file")]
    pub delimiter: Option<String>,
}

/// Work out the inclusive date range the arguments ask for
pub fn resolve_range(args: &SummaryArgs, today: NaiveDate) -> FinResult<DateRange> {
    if args.prev {
        return Ok(DateRange::previous_month(today));
    }

    if let Some(year) = args.year {
        return DateRange::year(year)
            .ok_or_else(|| FinError::Validation(format!("Invalid year: {}", year)));
    }

    let default = DateRange::month_to_date(today);
    let start = match &args.start {
        Some(raw) => validate_date(raw)?,
        None => default.start,
    };
    let end = match &args.end {
        Some(raw) => validate_date(raw)?,
        None => default.end,
    };

    DateRange::new(start, end).ok_or_else(|| {
        FinError::Validation(format!("Start date {} is after end date {}", start, end))
    })
}

/// Split a comma-separated category list, dropping empty entries
pub fn parse_category_filter(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// Handle `fin summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> FinResult<()> {
    let range = resolve_range(&args, Local::now().date_naive())?;
    let query = TransactionQuery::new(range)
        .with_categories(parse_category_filter(args.categories.as_deref()));

    let transactions = TransactionService::new(storage).query(&query)?;
    let summary = summarize(&transactions);

    match args.file {
        Some(path) => {
            let delimiter =
                parse_delimiter(args.delimiter.as_deref().unwrap_or(&settings.csv_delimiter))?;
            export_summary_file(&summary, &path, delimiter)?;
            println!("✓ Summary exported to {}", path.display());
        }
        None => {
            print!(
                "{}",
                format_summary_table(&summary, &range, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_month_to_date() {
        let range = resolve_range(&SummaryArgs::default(), date(2024, 5, 20)).unwrap();
        assert_eq!(range, DateRange::month_to_date(date(2024, 5, 20)));
    }

    #[test]
    fn test_prev_and_year_ranges() {
        let args = SummaryArgs {
            prev: true,
            ..Default::default()
        };
        let range = resolve_range(&args, date(2024, 5, 20)).unwrap();
        assert_eq!(range.start, date(2024, 4, 1));
        assert_eq!(range.end, date(2024, 4, 30));

        let args = SummaryArgs {
            year: Some(2023),
            ..Default::default()
        };
        let range = resolve_range(&args, date(2024, 5, 20)).unwrap();
        assert_eq!(range.start, date(2023, 1, 1));
        assert_eq!(range.end, date(2023, 12, 31));
    }

    #[test]
    fn test_explicit_range_with_defaults() {
        let args = SummaryArgs {
            start: Some("2024-01-01".into()),
            ..Default::default()
        };
        let range = resolve_range(&args, date(2024, 5, 20)).unwrap();
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 5, 20));
    }

    #[test]
    fn test_invalid_ranges() {
        let bad_date = SummaryArgs {
            end: Some("2024-02-30".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_range(&bad_date, date(2024, 5, 20)),
            Err(FinError::InvalidDate(_))
        ));

        let inverted = SummaryArgs {
            start: Some("2024-03-01".into()),
            end: Some("2024-02-01".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_range(&inverted, date(2024, 5, 20)),
            Err(FinError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_category_filter() {
        assert!(parse_category_filter(None).is_empty());
        assert!(parse_category_filter(Some(" , ")).is_empty());
        assert_eq!(
            parse_category_filter(Some("groceries, work,,home ")),
            vec!["groceries", "work", "home"]
        );
    }
}

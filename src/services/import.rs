//! CSV Import service
//!
//! Bulk admission from delimiter-separated files. Structural problems with
//! the source (too few lines, missing headers) reject the whole batch before
//! anything is written. After that every row stands alone: a row that fails
//! validation is recorded and skipped, the rest are admitted.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{FinError, FinResult};
use crate::models::{NewTransaction, TransactionType};
use crate::services::validation::{validate_amount, validate_date};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Header names every import source must carry
pub const REQUIRED_HEADERS: [&str; 3] = ["amount", "date", "category"];

/// One raw data row, fields as they appeared in the source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportRow {
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl ImportRow {
    pub fn new(
        amount: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            date: date.into(),
            category: category.into(),
        }
    }
}

/// A row that was not admitted
#[derive(Debug)]
pub struct SkippedRow {
    /// 0-based position among the data rows
    pub row: usize,
    pub reason: FinError,
}

/// Outcome of a batch import
#[derive(Debug, Default)]
pub struct ImportReport {
    pub admitted: usize,
    /// In source order
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    pub fn total_rows(&self) -> usize {
        self.admitted + self.skipped.len()
    }
}

/// Column positions of the required headers
#[derive(Debug, Clone, Copy)]
struct HeaderMap {
    amount: usize,
    date: usize,
    category: usize,
}

impl HeaderMap {
    /// Locate required columns (case-insensitive, any order)
    fn from_headers(headers: &StringRecord) -> FinResult<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let position = |wanted: &str| {
            names
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| FinError::MalformedSource(format!("missing required header: {}", wanted)))
        };

        Ok(Self {
            amount: position(REQUIRED_HEADERS[0])?,
            date: position(REQUIRED_HEADERS[1])?,
            category: position(REQUIRED_HEADERS[2])?,
        })
    }

    fn extract(&self, record: &StringRecord) -> ImportRow {
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        ImportRow {
            amount: field(self.amount),
            date: field(self.date),
            category: field(self.category),
        }
    }
}

/// Parse import source text into raw rows
///
/// Fails with `MalformedSource` when there are fewer than two lines or a
/// required header is missing. Extra columns are ignored.
pub fn parse_source(content: &str, delimiter: u8) -> FinResult<Vec<ImportRow>> {
    let content = content.trim();
    if content.lines().count() < 2 {
        return Err(FinError::MalformedSource(
            "file must contain a header row and at least one data row".into(),
        ));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FinError::MalformedSource(format!("unreadable header row: {}", e)))?
        .clone();
    let map = HeaderMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| FinError::MalformedSource(format!("unreadable row: {}", e)))?;
        rows.push(map.extract(&record));
    }

    Ok(rows)
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Read, parse and import a file
    pub fn import_file(
        &self,
        path: &Path,
        delimiter: u8,
        kind: TransactionType,
    ) -> FinResult<ImportReport> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FinError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let rows = parse_source(&content, delimiter)?;

        self.import_batch(&rows, kind)
    }

    /// Admit every valid row and record the rest
    ///
    /// Only storage failures abort the batch; rows admitted before such a
    /// failure stay admitted.
    pub fn import_batch(&self, rows: &[ImportRow], kind: TransactionType) -> FinResult<ImportReport> {
        let transactions = TransactionService::new(self.storage);

        let report = rows.iter().enumerate().try_fold(
            ImportReport::default(),
            |mut report, (index, row)| -> FinResult<ImportReport> {
                match self.check_row(row, kind) {
                    Ok(candidate) => {
                        transactions.append(&candidate)?;
                        report.admitted += 1;
                    }
                    Err(reason) if reason.is_validation() => {
                        warn!(row = index + 1, kind = reason.kind(), "skipping row: {}", reason);
                        report.skipped.push(SkippedRow { row: index, reason });
                    }
                    Err(other) => return Err(other),
                }
                Ok(report)
            },
        )?;

        info!(
            rows = report.total_rows(),
            admitted = report.admitted,
            skipped = report.skipped.len(),
            "import finished"
        );

        Ok(report)
    }

    /// Bulk rows only need a usable amount, date and a named category that is
    /// not disabled; the category does not have to be registered
    fn check_row(&self, row: &ImportRow, kind: TransactionType) -> FinResult<NewTransaction> {
        let amount = validate_amount(&row.amount)?;
        let date = validate_date(&row.date)?;

        let category = row.category.trim();
        if category.is_empty() {
            return Err(FinError::UnknownCategory(String::new()));
        }
        if self.storage.categories().is_disabled(category)? {
            return Err(FinError::DisabledCategory(category.to_string()));
        }

        Ok(NewTransaction::new(kind, amount, category, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CategoryService;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_storage() -> Storage {
        let storage = Storage::in_memory().unwrap();
        storage.initialize().unwrap();
        storage
    }

    fn january(storage: &Storage) -> Vec<crate::models::Transaction> {
        TransactionService::new(storage)
            .between(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn test_parse_simple_source() {
        let rows = parse_source("amount;date;category\n50;2024-01-15;groceries\n", b';').unwrap();
        assert_eq!(rows, vec![ImportRow::new("50", "2024-01-15", "groceries")]);
    }

    #[test]
    fn test_parse_headers_any_case_and_order() {
        let content = "Category,Note,DATE,Amount\nhome, rent ,2024-01-01, 900\n";
        let rows = parse_source(content, b',').unwrap();
        assert_eq!(rows, vec![ImportRow::new("900", "2024-01-01", "home")]);
    }

    #[test]
    fn test_parse_short_rows_become_empty_fields() {
        let rows = parse_source("amount;date;category\n50\n", b';').unwrap();
        assert_eq!(rows, vec![ImportRow::new("50", "", "")]);
    }

    #[test]
    fn test_import_rows_without_category_are_skipped() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let rows = parse_source("amount;date;category\n50;2024-01-15;\n60;2024-01-16\n", b';').unwrap();
        let report = service.import_batch(&rows, TransactionType::Expense).unwrap();

        assert_eq!(report.admitted, 0);
        assert_eq!(report.skipped.len(), 2);
        for (expected_row, skipped) in report.skipped.iter().enumerate() {
            assert_eq!(skipped.row, expected_row);
            assert!(matches!(skipped.reason, FinError::UnknownCategory(_)));
        }
        assert!(january(&storage).is_empty());
    }

    #[test]
    fn test_parse_too_few_lines() {
        for content in ["", "amount;date;category", "  amount;date;category \n\n"] {
            assert!(matches!(
                parse_source(content, b';'),
                Err(FinError::MalformedSource(_))
            ));
        }
    }

    #[test]
    fn test_parse_missing_header() {
        let result = parse_source("amount;when;category\n5;2024-01-01;home", b';');
        match result {
            Err(FinError::MalformedSource(msg)) => assert!(msg.contains("date")),
            other => panic!("expected MalformedSource, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_delimiter_is_missing_header() {
        let result = parse_source("amount,date,category\n5,2024-01-01,home", b';');
        assert!(matches!(result, Err(FinError::MalformedSource(_))));
    }

    #[test]
    fn test_import_mixed_batch() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let rows = vec![
            ImportRow::new("50", "2024-01-15", "groceries"),
            ImportRow::new("-5", "2024-01-16", "groceries"),
            ImportRow::new("20", "bad-date", "groceries"),
        ];
        let report = service.import_batch(&rows, TransactionType::Expense).unwrap();

        assert_eq!(report.admitted, 1);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].row, 1);
        assert!(matches!(report.skipped[0].reason, FinError::InvalidAmount(_)));
        assert_eq!(report.skipped[1].row, 2);
        assert!(matches!(report.skipped[1].reason, FinError::InvalidDate(_)));

        let stored = january(&storage);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, 50.0);
    }

    #[test]
    fn test_import_counts_add_up() {
        let storage = create_test_storage();
        CategoryService::new(&storage).disable("outings").unwrap();
        let service = ImportService::new(&storage);

        let rows = vec![
            ImportRow::new("1", "2024-01-01", "home"),
            ImportRow::new("abc", "2024-01-02", "home"),
            ImportRow::new("2", "2024-01-03", "outings"),
            ImportRow::new("3", "2024-02-30", "home"),
            ImportRow::new("4", "2024-01-05", "utilities"),
            ImportRow::new("0", "2024-01-06", "home"),
        ];
        let report = service.import_batch(&rows, TransactionType::Expense).unwrap();

        assert_eq!(report.admitted, 2);
        assert_eq!(report.total_rows(), rows.len());
        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|s| (s.row, s.reason.kind()))
            .collect();
        assert_eq!(
            skipped,
            vec![
                (1, "InvalidAmount"),
                (2, "DisabledCategory"),
                (3, "InvalidDate"),
                (5, "InvalidAmount"),
            ]
        );
        assert_eq!(january(&storage).len(), 2);
    }

    #[test]
    fn test_import_admits_unregistered_category() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let rows = vec![ImportRow::new("7.5", "2024-01-09", "coffee")];
        let report = service.import_batch(&rows, TransactionType::Expense).unwrap();

        assert_eq!(report.admitted, 1);
        assert_eq!(january(&storage)[0].category, "coffee");
    }

    #[test]
    fn test_import_income_batch() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let rows = vec![ImportRow::new("1000", "2024-01-31", "work")];
        service.import_batch(&rows, TransactionType::Income).unwrap();

        let stored = january(&storage);
        assert_eq!(stored[0].kind, TransactionType::Income);
    }

    #[test]
    fn test_import_file() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "date;amount;category;memo").unwrap();
        writeln!(file, "2024-01-03;12.40;groceries;market").unwrap();
        writeln!(file, "2024-01-04;8;transportation;bus").unwrap();

        let report = service
            .import_file(file.path(), b';', TransactionType::Expense)
            .unwrap();
        assert_eq!(report.admitted, 2);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_import_file_malformed_writes_nothing() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "amount;date").unwrap();
        writeln!(file, "5;2024-01-01").unwrap();

        let result = service.import_file(file.path(), b';', TransactionType::Expense);
        assert!(matches!(result, Err(FinError::MalformedSource(_))));
        assert_eq!(storage.transactions().count().unwrap(), 0);
    }

    #[test]
    fn test_import_missing_file() {
        let storage = create_test_storage();
        let service = ImportService::new(&storage);

        let result = service.import_file(
            Path::new("/definitely/not/here.csv"),
            b';',
            TransactionType::Expense,
        );
        assert!(matches!(result, Err(FinError::Io(msg)) if msg.contains("/definitely/not/here.csv")));
    }
}

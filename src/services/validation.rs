//! Admission checks
//!
//! `validate_amount` and `validate_date` are pure. `resolve_category` only
//! reads the registry. Nothing here writes.

use chrono::NaiveDate;

use crate::error::{FinError, FinResult};
use crate::models::{Category, TransactionType};
use crate::storage::CategoryRepository;

/// Parse a positive, finite amount
pub fn validate_amount(raw: &str) -> FinResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(FinError::InvalidAmount(raw.to_string())),
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn validate_date(raw: &str) -> FinResult<NaiveDate> {
    let trimmed = raw.trim();
    if !has_iso_date_shape(trimmed) {
        return Err(FinError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| FinError::InvalidDate(raw.to_string()))
}

/// Exactly four digits, dash, two digits, dash, two digits
fn has_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Look up an enabled category of the expected type by exact name
///
/// Surrounding whitespace is ignored, matching how names are registered.
pub fn resolve_category(
    categories: &CategoryRepository<'_>,
    name: &str,
    expected: TransactionType,
) -> FinResult<Category> {
    let name = name.trim();
    let category = categories
        .get_by_name(name)?
        .filter(|c| c.kind == expected)
        .ok_or_else(|| FinError::UnknownCategory(name.to_string()))?;

    if !category.is_active() {
        return Err(FinError::DisabledCategory(name.to_string()));
    }

    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[test]
    fn test_validate_amount_accepts_positive() {
        assert_eq!(validate_amount("50").unwrap(), 50.0);
        assert_eq!(validate_amount(" 12.34 ").unwrap(), 12.34);
        assert_eq!(validate_amount("0.01").unwrap(), 0.01);
    }

    #[test]
    fn test_validate_amount_rejects() {
        for raw in ["0", "-5", "", "abc", "NaN", "inf", "12abc", "-0.0"] {
            let result = validate_amount(raw);
            assert!(
                matches!(result, Err(FinError::InvalidAmount(_))),
                "expected InvalidAmount for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_validate_date_accepts_calendar_dates() {
        assert_eq!(
            validate_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(validate_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_validate_date_rejects() {
        for raw in [
            "bad-date",
            "2024-13-01",
            "2023-02-29",
            "2024-1-5",
            "24-01-15",
            "2024/01/15",
            "2024-01-15T00:00",
            "",
        ] {
            assert!(
                matches!(validate_date(raw), Err(FinError::InvalidDate(_))),
                "expected InvalidDate for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_resolve_category() {
        let storage = Storage::in_memory().unwrap();
        storage.initialize().unwrap();
        let categories = storage.categories();

        let found = resolve_category(&categories, "groceries", TransactionType::Expense).unwrap();
        assert_eq!(found.name, "groceries");

        let padded = resolve_category(&categories, " groceries ", TransactionType::Expense).unwrap();
        assert_eq!(padded.name, "groceries");

        assert!(matches!(
            resolve_category(&categories, "missing", TransactionType::Expense),
            Err(FinError::UnknownCategory(_))
        ));

        // Registered under the other type
        assert!(matches!(
            resolve_category(&categories, "work", TransactionType::Expense),
            Err(FinError::UnknownCategory(_))
        ));

        categories.set_disabled("groceries").unwrap();
        assert!(matches!(
            resolve_category(&categories, "groceries", TransactionType::Expense),
            Err(FinError::DisabledCategory(_))
        ));
    }
}

//! Summary and import report formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{DateRange, TransactionType};
use crate::services::summary::{format_amount, Summary};
use crate::services::ImportReport;

#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Summary table with currency-prefixed, two-decimal amounts
pub fn format_summary_table(summary: &Summary, range: &DateRange, currency: &str) -> String {
    let money = |value: f64| format!("{}{}", currency, format_amount(value));

    let lines: Vec<_> = summary
        .all_rows()
        .map(|row| SummaryLine {
            category: row.category.clone(),
            income: money(row.income),
            expense: money(row.expense),
            net: money(row.net()),
        })
        .collect();

    let mut table = Table::new(lines);
    table
        .with(Style::modern())
        .modify(Columns::new(1..), Alignment::right());

    let mut output = format!("Financial Summary ({})\n\n", range);
    if summary.is_empty() {
        output.push_str("No transactions in this period.\n");
    }
    output.push_str(&format!("{}\n", table));
    output
}

/// Outcome of a bulk import, skipped rows numbered from 1
pub fn format_import_report(report: &ImportReport, kind: TransactionType, source: &str) -> String {
    let mut output = format!("✓ Imported {} {}(s) from {}\n", report.admitted, kind, source);

    if !report.skipped.is_empty() {
        output.push_str(&format!("  Skipped {} row(s):\n", report.skipped.len()));
        for skipped in &report.skipped {
            output.push_str(&format!("    Row {}: {}\n", skipped.row + 1, skipped.reason));
        }
    }

    output
}

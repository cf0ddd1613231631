//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, TransactionType};

#[derive(Tabled)]
struct CategoryLine<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn category_table(categories: &[&Category]) -> String {
    let lines: Vec<_> = categories
        .iter()
        .map(|c| CategoryLine {
            name: &c.name,
            status: c.status_label(),
        })
        .collect();

    Table::new(lines).with(Style::modern()).to_string()
}

/// Income and expense categories as two tables, in registry order
pub fn format_category_tables(categories: &[Category]) -> String {
    let mut output = String::new();

    for (kind, title) in [
        (TransactionType::Income, "Income Categories"),
        (TransactionType::Expense, "Expense Categories"),
    ] {
        let of_kind: Vec<&Category> = categories.iter().filter(|c| c.kind == kind).collect();
        if of_kind.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}:\n", title));
        output.push_str(&category_table(&of_kind));
        output.push('\n');
    }

    if output.is_empty() {
        return "No categories found.\n".to_string();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    fn category(id: i64, name: &str, kind: TransactionType, disabled: bool) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.into(),
            kind,
            disabled,
        }
    }

    #[test]
    fn test_tables_split_by_type() {
        let categories = vec![
            category(1, "general", TransactionType::Expense, false),
            category(2, "outings", TransactionType::Expense, true),
            category(3, "work", TransactionType::Income, false),
        ];
        let output = format_category_tables(&categories);

        let income_at = output.find("Income Categories").unwrap();
        let expense_at = output.find("Expense Categories").unwrap();
        assert!(income_at < expense_at);
        assert!(output.contains("Disabled"));
        assert!(output[expense_at..].contains("outings"));
        assert!(!output[expense_at..].contains("work"));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_category_tables(&[]), "No categories found.\n");
    }
}

//! Expense display formatting
//!
//! Formats categories and expenses for terminal output in tree and table views.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use super::format::Formatter;
use crate::models::{ExpenseItem, ExpenseStore};
use crate::services::CategorySummary;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Expenses")]
    expenses: usize,
    #[tabled(rename = "Monthly")]
    monthly: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Expense")]
    name: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
}

/// Format every category with its monthly amounts as a tree
pub fn format_expense_tree(store: &ExpenseStore, formatter: &Formatter) -> String {
    if store.is_empty() {
        return "No categories found.\n\nRun 'burnrate category add <name>' to create one.\n"
            .to_string();
    }

    let mut output = String::new();
    let count = store.category_count();

    for (i, (name, category)) in store.categories().enumerate() {
        output.push_str(&format!(
            "{} ({} / month)\n",
            name,
            formatter.format_money_with(category.total(), 2)
        ));

        if category.is_empty() {
            output.push_str("  (no expenses)\n");
        } else {
            for (j, (expense, item)) in category.iter().enumerate() {
                let prefix = if j == category.len() - 1 { "└── " } else { "├── " };
                let paused = if item.amount == 0.0 { " (paused)" } else { "" };
                output.push_str(&format!(
                    "  {}{}: {} / month{}\n",
                    prefix,
                    expense,
                    formatter.format_money_with(item.amount, 2),
                    paused
                ));
            }
        }

        if i < count - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format category summaries as a table
pub fn format_category_table(categories: &[CategorySummary], formatter: &Formatter) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        expenses: c.expense_count,
        monthly: formatter.format_money_with(c.monthly_total, 2),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    format!("{}\n", table)
}

/// Format the expenses of one category as a table
pub fn format_expense_table(
    category: &str,
    expenses: &[(String, ExpenseItem)],
    formatter: &Formatter,
) -> String {
    if expenses.is_empty() {
        return format!("No expenses in '{}'.\n", category);
    }

    let rows = expenses.iter().map(|(name, item)| ExpenseRow {
        name: name.clone(),
        monthly: formatter.format_money_with(item.amount, 2),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    format!("{}\n{}\n", category, table)
}

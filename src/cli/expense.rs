//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_table, format_expense_tree, Formatter};
use crate::error::BurnRateResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses, grouped by category
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a fixed monthly expense to a category
    Add {
        /// Category name
        category: String,
        /// Expense name
        name: String,
        /// Monthly amount (e.g. "12000" or "89.95"); 0 pauses the expense
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Change the monthly amount of an expense
    Edit {
        /// Category name
        category: String,
        /// Expense name
        name: String,
        /// New monthly amount
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Delete an expense
    Delete {
        /// Category name
        category: String,
        /// Expense name
        name: String,
    },
}

impl ExpenseCommands {
    /// Whether the command writes the expense document
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ExpenseCommands::List { .. })
    }
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BurnRateResult<()> {
    let service = ExpenseService::new(storage);
    let formatter = Formatter::from_settings(settings);

    match cmd {
        ExpenseCommands::List { category } => match category {
            Some(category) => {
                let expenses = service.list_expenses(&category)?;
                print!("{}", format_expense_table(&category, &expenses, &formatter));
            }
            None => {
                print!("{}", format_expense_tree(&service.store()?, &formatter));
            }
        },

        ExpenseCommands::Add {
            category,
            name,
            amount,
        } => {
            let item = service.add_expense(&category, &name, amount)?;
            println!(
                "Added expense: {}/{} ({} / month)",
                category,
                name.trim(),
                formatter.format_money_with(item.amount, 2)
            );
        }

        ExpenseCommands::Edit {
            category,
            name,
            amount,
        } => {
            let item = service.update_expense(&category, &name, amount)?;
            println!(
                "Updated expense: {}/{} ({} / month)",
                category,
                name,
                formatter.format_money_with(item.amount, 2)
            );
        }

        ExpenseCommands::Delete { category, name } => {
            service.delete_expense(&category, &name)?;
            println!("Deleted expense: {}/{}", category, name);
        }
    }

    Ok(())
}

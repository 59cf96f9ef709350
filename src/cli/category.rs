//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_table, Formatter};
use crate::error::BurnRateResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their monthly totals
    List,

    /// Create a new, empty category
    Add {
        /// Category name (case-sensitive)
        name: String,
    },

    /// Delete a category and every expense in it
    Delete {
        /// Category name
        name: String,
    },
}

impl CategoryCommands {
    /// Whether the command writes the expense document
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CategoryCommands::List)
    }
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BurnRateResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let formatter = Formatter::from_settings(settings);
            print!("{}", format_category_table(&service.list_categories()?, &formatter));
        }

        CategoryCommands::Add { name } => {
            let name = service.add_category(&name)?;
            println!("Created category: {}", name);
        }

        CategoryCommands::Delete { name } => {
            let removed = service.delete_category(&name)?;
            println!(
                "Deleted category: {} ({} expenses removed)",
                name,
                removed.len()
            );
        }
    }

    Ok(())
}

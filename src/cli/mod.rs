//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod expense;
pub mod ticker;

pub use audit::handle_audit_command;
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use ticker::{handle_show_command, handle_watch_command, WatchOptions};

//! Display formatting for terminal output
//!
//! Turns amounts and snapshots into strings: the locale-style number
//! formatter, expense listings, and the plain-text ticker readout.

pub mod expenses;
pub mod format;
pub mod snapshot;

pub use expenses::{format_category_table, format_expense_table, format_expense_tree};
pub use format::Formatter;
pub use snapshot::{format_snapshot, unit_heading};

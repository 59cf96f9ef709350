//! Service layer for burnrate
//!
//! The service layer sits on top of storage and the rate engine: validated
//! mutations with persistence and auditing, and the per-tick projection step
//! the ticker drivers call.

pub mod expense;
pub mod ticker;

pub use expense::{CategorySummary, ExpenseService};
pub use ticker::Ticker;

//! Core data models for burnrate
//!
//! This module contains the data structures that describe a user's fixed
//! monthly costs: expense items, the categories grouping them, the store
//! holding every category, and the time units figures are projected into.

pub mod expense;
pub mod store;
pub mod unit;

pub use expense::{Category, ExpenseItem, ExpenseValidationError, NAME_SEPARATOR};
pub use store::ExpenseStore;
pub use unit::{TimeUnit, SECONDS_PER_DAY};

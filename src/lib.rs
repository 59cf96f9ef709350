//! burnrate - live ticker for fixed monthly expenses
//!
//! This library turns a set of fixed monthly expenses, grouped into named
//! categories, into a continuously updating view of what they cost per
//! second, minute, hour, day, week, month and year, and how much has
//! accumulated since the start of the current calendar month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense store and time units
//! - `engine`: Rate computation and the month clock
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `tui`: Full-screen live ticker
//!
//! # Example
//!
//! ```rust,ignore
//! use burnrate::config::{paths::BurnRatePaths, settings::Settings};
//!
//! let paths = BurnRatePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BurnRateError;

//! Custom error types for burnrate
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for burnrate operations
#[derive(Error, Debug)]
pub enum BurnRateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A monthly amount that is negative or not a finite number
    #[error("Invalid amount: {0} (monthly amounts must be zero or positive)")]
    InvalidAmount(f64),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The change was saved but could not be written to the audit log
    #[error("The change was saved, but the audit log could not be updated: {0}")]
    Audit(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BurnRateError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for an expense within a category
    pub fn expense_not_found(category: &str, expense: &str) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: format!("{}/{}", category, expense),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for BurnRateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BurnRateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for burnrate operations
pub type BurnRateResult<T> = Result<T, BurnRateError>;

//! Storage layer for burnrate
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail every mutation is recorded in.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BurnRatePaths;
use crate::error::BurnRateError;

/// Main storage coordinator
pub struct Storage {
    paths: BurnRatePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BurnRatePaths) -> Result<Self, BurnRateError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BurnRatePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), BurnRateError> {
        self.expenses.load()
    }

    /// Write an empty expense document if none exists yet
    pub fn initialize(&self) -> Result<bool, BurnRateError> {
        if self.expenses.path().exists() {
            return Ok(false);
        }
        self.expenses.save()?;
        Ok(true)
    }

    /// The audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), BurnRateError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    /// Record an update operation
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        summary: Option<String>,
    ) -> Result<(), BurnRateError> {
        self.audit
            .log(&AuditEntry::update(entity_type, entity_id, before, after, summary))
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), BurnRateError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity))
    }
}

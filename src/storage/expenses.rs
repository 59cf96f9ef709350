//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense document (expenses.json).

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BurnRateError, BurnRateResult};
use crate::models::ExpenseStore;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the single expense document
pub struct ExpenseRepository {
    path: PathBuf,
    store: RwLock<ExpenseStore>,
}

impl ExpenseRepository {
    /// Create a new repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            store: RwLock::new(ExpenseStore::new()),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the document from disk
    ///
    /// A missing file yields an empty store. On any failure the in-memory
    /// store is left empty rather than partially loaded.
    pub fn load(&self) -> BurnRateResult<()> {
        let loaded = read_json::<ExpenseStore, _>(&self.path)
            .and_then(|store| store.validate().map(|()| store));

        let mut store = self
            .store
            .write()
            .map_err(|e| BurnRateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match loaded {
            Ok(document) => {
                *store = document;
                Ok(())
            }
            Err(e) => {
                *store = ExpenseStore::new();
                Err(e)
            }
        }
    }

    /// Write the current store to disk
    pub fn save(&self) -> BurnRateResult<()> {
        let store = self
            .store
            .read()
            .map_err(|e| BurnRateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*store)
    }

    /// A consistent copy of the store for evaluation
    pub fn snapshot(&self) -> BurnRateResult<ExpenseStore> {
        let store = self
            .store
            .read()
            .map_err(|e| BurnRateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(store.clone())
    }

    /// Apply a mutation and persist it
    ///
    /// The mutation runs on a copy. The copy is written to disk and only then
    /// replaces the in-memory store, so a rejected mutation or a failed write
    /// leaves memory matching the file.
    pub fn update<T, F>(&self, mutate: F) -> BurnRateResult<T>
    where
        F: FnOnce(&mut ExpenseStore) -> BurnRateResult<T>,
    {
        let mut store = self
            .store
            .write()
            .map_err(|e| BurnRateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut draft = store.clone();
        let output = mutate(&mut draft)?;

        write_json_atomic(&self.path, &draft)?;
        *store = draft;

        Ok(output)
    }
}

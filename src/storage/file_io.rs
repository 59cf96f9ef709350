//! JSON file helpers
//!
//! Documents are always rewritten whole: serialize to a sibling temp file,
//! fsync, then rename over the original.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BurnRateError;

/// Read a JSON document, or `T::default()` when the file does not exist
pub fn read_json<T, P>(path: P) -> Result<T, BurnRateError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => {
            return Err(BurnRateError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| BurnRateError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Replace a JSON document atomically
///
/// Either the whole new document lands or the previous one is left untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BurnRateError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BurnRateError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let result = write_and_sync(&temp_path, data).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| BurnRateError::Storage(format!("Failed to replace {}: {}", path.display(), e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_and_sync<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), BurnRateError> {
    let file = File::create(temp_path)
        .map_err(|e| BurnRateError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| BurnRateError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BurnRateError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| BurnRateError::Storage(format!("Failed to sync data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseStore;
    use tempfile::TempDir;

    fn store_with_rent() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add_category("Housing").unwrap();
        store.add_expense("Housing", "Rent", 12000.0).unwrap();
        store
    }

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let store: ExpenseStore = read_json(temp_dir.path().join("expenses.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        write_json_atomic(&path, &store_with_rent()).unwrap();

        let loaded: ExpenseStore = read_json(&path).unwrap();
        assert_eq!(loaded, store_with_rent());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        write_json_atomic(&path, &store_with_rent()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("nested").join("expenses.json");

        write_json_atomic(&path, &ExpenseStore::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unparseable_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<ExpenseStore, _>(&path).unwrap_err();
        assert!(matches!(err, BurnRateError::Storage(_)));
    }
}

//! Path management for burnrate
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `BURNRATE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/burnrate` or `~/.config/burnrate`
//! 3. Windows: `%APPDATA%\burnrate`

use std::path::PathBuf;

use crate::error::BurnRateError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BURNRATE_DATA_DIR";

/// Manages all paths used by burnrate
#[derive(Debug, Clone)]
pub struct BurnRatePaths {
    /// Base directory for all burnrate data
    base_dir: PathBuf,
}

impl BurnRatePaths {
    /// Create a new BurnRatePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BurnRateError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BurnRatePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/burnrate/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/burnrate/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.json (categories and their monthly expenses)
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BurnRateError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BurnRateError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BurnRateError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if burnrate has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BurnRateError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BurnRateError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("burnrate"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BurnRateError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BurnRateError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("burnrate"))
}

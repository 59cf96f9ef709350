//! User settings for burnrate
//!
//! Manages display preferences (decimal places, currency symbol, separators,
//! timestamp format) and the ticker refresh interval.

use serde::{Deserialize, Serialize};

use super::paths::BurnRatePaths;
use crate::error::BurnRateError;

/// Largest number of decimal places the ticker will render
pub const MAX_DECIMAL_PLACES: u8 = 10;

/// Shortest tick interval a driver may be configured with
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

/// Where the currency symbol is placed relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// "kr. 1.000,00"
    Prefix,
    /// "1.000,00 kr."
    #[default]
    Suffix,
}

/// User settings for burnrate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Decimal places shown for every money figure
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u8,

    /// Currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Placement of the currency symbol
    #[serde(default)]
    pub symbol_position: SymbolPosition,

    /// Digit group separator
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Separator between whole and fractional part
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Timestamp format (strftime)
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Locale for month and weekday names (e.g. "da_DK", "en_US")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Milliseconds between ticks for `watch` and the TUI
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_decimal_places() -> u8 {
    6
}

fn default_currency() -> String {
    "kr.".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_datetime_format() -> String {
    "%-d. %B %Y %H:%M:%S".to_string()
}

fn default_locale() -> String {
    "da_DK".to_string()
}

fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            decimal_places: default_decimal_places(),
            currency_symbol: default_currency(),
            symbol_position: SymbolPosition::default(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            datetime_format: default_datetime_format(),
            locale: default_locale(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BurnRatePaths) -> Result<Self, BurnRateError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BurnRateError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BurnRateError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings.normalized())
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BurnRatePaths) -> Result<(), BurnRateError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BurnRateError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BurnRateError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Clamp out-of-range values instead of rejecting a hand-edited file
    pub fn normalized(mut self) -> Self {
        self.decimal_places = self.decimal_places.min(MAX_DECIMAL_PLACES);
        self.tick_interval_ms = self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS);
        self
    }

    /// Override the decimal places for one invocation
    pub fn with_decimal_places(mut self, decimal_places: Option<u8>) -> Self {
        if let Some(places) = decimal_places {
            self.decimal_places = places.min(MAX_DECIMAL_PLACES);
        }
        self
    }

    /// Tick interval as a Duration
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.decimal_places, 6);
        assert_eq!(settings.currency_symbol, "kr.");
        assert_eq!(settings.symbol_position, SymbolPosition::Suffix);
        assert_eq!(settings.tick_interval_ms, 1000);
        assert_eq!(settings.locale, "da_DK");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BurnRatePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.decimal_places = 2;
        settings.currency_symbol = "$".into();
        settings.symbol_position = SymbolPosition::Prefix;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.decimal_places, 2);
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.symbol_position, SymbolPosition::Prefix);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"decimal_places": 3}"#).unwrap();
        assert_eq!(settings.decimal_places, 3);
        assert_eq!(settings.decimal_separator, ",");
        assert_eq!(settings.tick_interval_ms, 1000);
    }

    #[test]
    fn test_normalized_clamps_values() {
        let settings = Settings {
            decimal_places: 42,
            tick_interval_ms: 5,
            ..Settings::default()
        }
        .normalized();

        assert_eq!(settings.decimal_places, MAX_DECIMAL_PLACES);
        assert_eq!(settings.tick_interval_ms, MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_decimal_override() {
        let settings = Settings::default().with_decimal_places(Some(2));
        assert_eq!(settings.decimal_places, 2);

        let unchanged = Settings::default().with_decimal_places(None);
        assert_eq!(unchanged.decimal_places, 6);
    }
}

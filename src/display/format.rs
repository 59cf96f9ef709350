//! Number and timestamp formatting
//!
//! Separators, symbol placement, decimal places, the timestamp pattern and its
//! locale all come from [`Settings`]; the defaults render `1.234,560000 kr.`
//! and `1. februar 2024 07:05:03`.

use std::fmt::Write as _;

use chrono::{Locale, NaiveDateTime};

use crate::config::settings::{Settings, SymbolPosition, MAX_DECIMAL_PLACES};

const FALLBACK_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats money amounts and timestamps for display
#[derive(Debug, Clone)]
pub struct Formatter {
    decimal_places: u8,
    currency_symbol: String,
    symbol_position: SymbolPosition,
    thousands_separator: String,
    decimal_separator: String,
    datetime_format: String,
    locale: Locale,
}

impl Formatter {
    /// Build a formatter from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            decimal_places: settings.decimal_places.min(MAX_DECIMAL_PLACES),
            currency_symbol: settings.currency_symbol.clone(),
            symbol_position: settings.symbol_position,
            thousands_separator: settings.thousands_separator.clone(),
            decimal_separator: settings.decimal_separator.clone(),
            datetime_format: settings.datetime_format.clone(),
            // Unknown locale names fall back to untranslated names
            locale: Locale::try_from(settings.locale.as_str()).unwrap_or(Locale::POSIX),
        }
    }

    /// Decimal places currently in use
    pub fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    /// Change the decimal places, clamped to the supported range
    pub fn set_decimal_places(&mut self, decimal_places: u8) {
        self.decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
    }

    /// Format a number with separators but without the currency symbol
    pub fn format_number(&self, value: f64) -> String {
        self.format_number_with(value, self.decimal_places)
    }

    fn format_number_with(&self, value: f64, decimal_places: u8) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let places = usize::from(decimal_places);
        let fixed = format!("{:.*}", places, value.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut output = String::new();
        // No sign when the amount rounds to zero
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            output.push('-');
        }
        output.push_str(&group_thousands(whole, &self.thousands_separator));
        if let Some(fraction) = fraction {
            output.push_str(&self.decimal_separator);
            output.push_str(fraction);
        }
        output
    }

    /// Format a money amount with the currency symbol
    pub fn format_money(&self, value: f64) -> String {
        self.with_symbol(self.format_number(value))
    }

    /// Format a money amount using a fixed number of decimals
    pub fn format_money_with(&self, value: f64, decimal_places: u8) -> String {
        self.with_symbol(self.format_number_with(value, decimal_places.min(MAX_DECIMAL_PLACES)))
    }

    fn with_symbol(&self, number: String) -> String {
        if self.currency_symbol.is_empty() {
            return number;
        }
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{} {}", self.currency_symbol, number),
            SymbolPosition::Suffix => format!("{} {}", number, self.currency_symbol),
        }
    }

    /// Format a share in [0, 1] as a percentage
    pub fn format_percent(&self, share: f64) -> String {
        format!("{}%", self.format_number_with(share * 100.0, 1))
    }

    /// Format a timestamp with the configured pattern
    ///
    /// Month and weekday names follow the configured locale. An invalid
    /// pattern falls back to ISO-like output instead of failing.
    pub fn format_datetime(&self, dt: NaiveDateTime) -> String {
        // Wall-clock value; the UTC tag only exists to reach format_localized
        let localized = dt.and_utc().format_localized(&self.datetime_format, self.locale);
        let mut output = String::new();
        if write!(output, "{}", localized).is_ok() {
            return output;
        }
        dt.format(FALLBACK_DATETIME_FORMAT).to_string()
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut output = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            output.push_str(separator);
        }
        output.push(ch);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn formatter(decimal_places: u8) -> Formatter {
        Formatter::from_settings(&Settings {
            decimal_places,
            ..Settings::default()
        })
    }

    #[test]
    fn test_default_locale_style() {
        let f = formatter(2);
        assert_eq!(f.format_money(1234567.891), "1.234.567,89 kr.");
        assert_eq!(f.format_money(0.0), "0,00 kr.");
        assert_eq!(f.format_money(999.999), "1.000,00 kr.");
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(formatter(0).format_number(1234.6), "1.235");
        assert_eq!(formatter(6).format_number(0.004480287), "0,004480");
        assert_eq!(formatter(10).format_number(1.0), "1,0000000000");
    }

    #[test]
    fn test_set_decimal_places_clamps() {
        let mut f = formatter(2);
        f.set_decimal_places(99);
        assert_eq!(f.decimal_places(), MAX_DECIMAL_PLACES);
    }

    #[test]
    fn test_negative_values() {
        let f = formatter(2);
        assert_eq!(f.format_number(-1234.5), "-1.234,50");
        assert_eq!(f.format_number(-0.001), "0,00");
    }

    #[test]
    fn test_prefix_symbol_and_custom_separators() {
        let f = Formatter::from_settings(&Settings {
            decimal_places: 2,
            currency_symbol: "$".into(),
            symbol_position: SymbolPosition::Prefix,
            thousands_separator: ",".into(),
            decimal_separator: ".".into(),
            ..Settings::default()
        });
        assert_eq!(f.format_money(12000.0), "$ 12,000.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", "."), "1");
        assert_eq!(group_thousands("123", "."), "123");
        assert_eq!(group_thousands("1234", "."), "1.234");
        assert_eq!(group_thousands("123456", " "), "123 456");
        assert_eq!(group_thousands("1234567", "."), "1.234.567");
    }

    #[test]
    fn test_percent() {
        assert_eq!(formatter(6).format_percent(0.3), "30,0%");
    }

    #[test]
    fn test_datetime_default_pattern() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();
        assert_eq!(formatter(2).format_datetime(dt), "1. februar 2024 07:05:03");
    }

    #[test]
    fn test_datetime_follows_locale() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();

        let english = Formatter::from_settings(&Settings {
            locale: "en_US".into(),
            ..Settings::default()
        });
        assert_eq!(english.format_datetime(dt), "1. February 2024 07:05:03");

        let unknown = Formatter::from_settings(&Settings {
            locale: "xx_XX".into(),
            ..Settings::default()
        });
        assert_eq!(unknown.format_datetime(dt), "1. February 2024 07:05:03");
    }

    #[test]
    fn test_datetime_invalid_pattern_falls_back() {
        let f = Formatter::from_settings(&Settings {
            datetime_format: "%Q".into(),
            ..Settings::default()
        });
        let dt = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();
        assert_eq!(f.format_datetime(dt), "2024-02-01 07:05:03");
    }
}

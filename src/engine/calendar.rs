//! Calendar helpers
//!
//! Gregorian month arithmetic on wall-clock timestamps.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Number of days in the given month (28-31)
///
/// An out-of-range month falls back to a nominal 30 days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Days in the month containing `dt`
pub fn days_in_month_of(dt: NaiveDateTime) -> u32 {
    days_in_month(dt.year(), dt.month())
}

/// Day 1, 00:00:00 of the month containing `dt`
pub fn start_of_month(dt: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1)
        .unwrap_or_else(|| dt.date())
        .and_time(NaiveTime::MIN)
}

/// Whether two timestamps fall in the same calendar month
pub fn same_month(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Signed seconds from `start` to `end`, millisecond precision
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_days_in_month_gregorian() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(2024, 0), 30);
        assert_eq!(days_in_month(2024, 13), 30);
    }

    #[test]
    fn test_start_of_month() {
        assert_eq!(
            start_of_month(at(2024, 3, 17, 13, 45, 12)),
            at(2024, 3, 1, 0, 0, 0)
        );
        assert_eq!(start_of_month(at(2024, 3, 1, 0, 0, 0)), at(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 31, 23, 59, 59)));
        assert!(!same_month(at(2024, 1, 31, 23, 59, 59), at(2024, 2, 1, 0, 0, 0)));
        assert!(!same_month(at(2023, 1, 5, 0, 0, 0), at(2024, 1, 5, 0, 0, 0)));
    }

    #[test]
    fn test_seconds_between() {
        let start = at(2024, 1, 1, 0, 0, 0);
        assert_eq!(seconds_between(start, at(2024, 1, 1, 0, 1, 1)), 61.0);
        assert_eq!(seconds_between(at(2024, 1, 1, 0, 1, 1), start), -61.0);

        let with_millis = start + chrono::Duration::milliseconds(1500);
        assert_eq!(seconds_between(start, with_millis), 1.5);
    }
}

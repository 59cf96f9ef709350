//! Display time units
//!
//! These are nominal lengths: a month is always 30 days and a year always 365
//! days. The per-second burn rate itself is calendar accurate; these only
//! scale it up for round, predictable display figures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A unit the per-second rate can be projected into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// Every unit, shortest first
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Fixed number of seconds in this unit
    pub const fn seconds(self) -> u32 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 3_600,
            TimeUnit::Day => SECONDS_PER_DAY,
            TimeUnit::Week => SECONDS_PER_DAY * 7,
            TimeUnit::Month => SECONDS_PER_DAY * 30,
            TimeUnit::Year => SECONDS_PER_DAY * 365,
        }
    }

    /// Label used in listings ("per hour")
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_multipliers() {
        assert_eq!(TimeUnit::Second.seconds(), 1);
        assert_eq!(TimeUnit::Minute.seconds(), 60);
        assert_eq!(TimeUnit::Hour.seconds(), 3_600);
        assert_eq!(TimeUnit::Day.seconds(), 86_400);
        assert_eq!(TimeUnit::Week.seconds(), 604_800);
        assert_eq!(TimeUnit::Month.seconds(), 2_592_000);
        assert_eq!(TimeUnit::Year.seconds(), 31_536_000);
    }

    #[test]
    fn test_all_is_sorted_shortest_first() {
        let seconds: Vec<u32> = TimeUnit::ALL.iter().map(|u| u.seconds()).collect();
        let mut sorted = seconds.clone();
        sorted.sort_unstable();
        assert_eq!(seconds, sorted);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&TimeUnit::Week).unwrap(), "\"week\"");
        assert_eq!(TimeUnit::Year.to_string(), "year");
    }
}

//! Month clock
//!
//! Owns the accumulation anchor: the first instant of the month the last
//! evaluated timestamp fell in. The anchor is always derived from `now`, never
//! advanced by elapsed ticks, so a late or skipped tick cannot skew totals.

use chrono::NaiveDateTime;

use super::calendar::{same_month, start_of_month};

/// Tracks which month accumulation starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthClock {
    anchor: NaiveDateTime,
}

impl MonthClock {
    /// Anchor the clock at the start of the month containing `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            anchor: start_of_month(now),
        }
    }

    /// The current accumulation origin
    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    /// Re-anchor if `now` is in a different month than the anchor
    ///
    /// Returns `true` when the anchor moved. A `now` in an earlier month (the
    /// system clock was set back) moves the anchor back as well.
    pub fn evaluate(&mut self, now: NaiveDateTime) -> bool {
        if same_month(self.anchor, now) {
            return false;
        }
        self.anchor = start_of_month(now);
        true
    }
}

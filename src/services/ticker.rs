//! The per-tick projection step
//!
//! A driver (the `watch` loop, the TUI, a test) owns the schedule and calls
//! [`Ticker::tick`] with the current time. The ticker re-anchors its month
//! clock and then computes a fresh snapshot; it never loops or sleeps.

use chrono::NaiveDateTime;

use crate::engine::{rate, MonthClock, RateSnapshot};
use crate::models::ExpenseStore;

/// Month clock plus the evaluate-then-snapshot step
#[derive(Debug, Clone)]
pub struct Ticker {
    clock: MonthClock,
}

impl Ticker {
    /// Start a ticker anchored at the month containing `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            clock: MonthClock::new(now),
        }
    }

    /// Start a ticker at the current local time
    pub fn start() -> Self {
        Self::new(local_now())
    }

    /// The current accumulation anchor
    pub fn anchor(&self) -> NaiveDateTime {
        self.clock.anchor()
    }

    /// Evaluate the clock for `now` and project the store
    pub fn tick(&mut self, store: &ExpenseStore, now: NaiveDateTime) -> RateSnapshot {
        self.clock.evaluate(now);
        rate::snapshot(store, self.clock.anchor(), now)
    }
}

/// Wall-clock local time, the timestamp drivers pass to [`Ticker::tick`]
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

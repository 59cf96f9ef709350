//! Expense rate projection engine
//!
//! Turns a static [`ExpenseStore`](crate::models::ExpenseStore) into a
//! per-second burn rate, projects it into display units, and accumulates it
//! from the start of the current month.
//!
//! Nothing in here loops, sleeps or touches the filesystem. A driver supplies
//! the current time once per tick:
//!
//! ```rust
//! use burnrate::engine::{rate, MonthClock};
//! use burnrate::models::ExpenseStore;
//! use chrono::NaiveDate;
//!
//! let mut store = ExpenseStore::new();
//! store.add_category("Housing").unwrap();
//! store.add_expense("Housing", "Rent", 12000.0).unwrap();
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let mut clock = MonthClock::new(now);
//! clock.evaluate(now);
//! let snapshot = rate::snapshot(&store, clock.anchor(), now);
//! assert!(snapshot.totals.accumulated > 0.0);
//! ```

pub mod calendar;
pub mod clock;
pub mod rate;
pub mod snapshot;

pub use clock::MonthClock;
pub use snapshot::{CategoryFigures, RateFigures, RateSnapshot};

//! Application state for the TUI
//!
//! The App struct holds the ticker, the latest snapshot and the
//! session-only display state.

use chrono::NaiveDateTime;

use crate::config::settings::{Settings, MAX_DECIMAL_PLACES};
use crate::display::Formatter;
use crate::engine::RateSnapshot;
use crate::models::ExpenseStore;
use crate::services::ticker::{local_now, Ticker};
use crate::storage::Storage;

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Formatter with the session's decimal places
    pub formatter: Formatter,

    /// Month clock and projection step
    pub ticker: Ticker,

    /// Most recent snapshot
    pub snapshot: RateSnapshot,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Highlighted row in the category table
    pub selected_category_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the last read of the expense document failed
    load_failed: bool,
}

impl<'a> App<'a> {
    /// Create a new App and take the first snapshot
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self::new_at(storage, settings, local_now())
    }

    /// Create a new App anchored at `now`
    pub fn new_at(storage: &'a Storage, settings: &Settings, now: NaiveDateTime) -> Self {
        let mut ticker = Ticker::new(now);
        let store = storage.expenses.snapshot().unwrap_or_else(|_| ExpenseStore::new());
        let snapshot = ticker.tick(&store, now);

        Self {
            storage,
            formatter: Formatter::from_settings(settings),
            ticker,
            snapshot,
            should_quit: false,
            selected_category_index: 0,
            status_message: None,
            load_failed: false,
        }
    }

    /// Recompute the snapshot at the current local time
    pub fn tick(&mut self) {
        self.tick_at(local_now());
    }

    /// Re-read the expense document and recompute the snapshot at `now`
    ///
    /// Changes made by other processes show up on the next tick.
    pub fn tick_at(&mut self, now: NaiveDateTime) {
        match self.storage.expenses.load() {
            Ok(()) if self.load_failed => {
                self.load_failed = false;
                self.clear_status();
            }
            Ok(()) => {}
            Err(e) => {
                self.load_failed = true;
                self.set_status(format!("Reload failed: {}", e));
            }
        }

        match self.storage.expenses.snapshot() {
            Ok(store) => {
                self.snapshot = self.ticker.tick(&store, now);
                self.clamp_selection();
            }
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    /// Tick immediately instead of waiting for the next interval
    pub fn reload(&mut self) {
        self.tick();
        if !self.load_failed {
            self.set_status("Expenses reloaded");
        }
    }

    /// Show one more decimal place
    pub fn increase_decimals(&mut self) {
        let places = (self.formatter.decimal_places() + 1).min(MAX_DECIMAL_PLACES);
        self.formatter.set_decimal_places(places);
    }

    /// Show one fewer decimal place
    pub fn decrease_decimals(&mut self) {
        let places = self.formatter.decimal_places().saturating_sub(1);
        self.formatter.set_decimal_places(places);
    }

    /// Move the category highlight down
    pub fn select_next(&mut self) {
        if self.selected_category_index + 1 < self.snapshot.categories.len() {
            self.selected_category_index += 1;
        }
    }

    /// Move the category highlight up
    pub fn select_previous(&mut self) {
        self.selected_category_index = self.selected_category_index.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.snapshot.categories.len();
        if self.selected_category_index >= len {
            self.selected_category_index = len.saturating_sub(1);
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

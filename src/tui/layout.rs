//! Layout definitions for the TUI
//!
//! Header on top, totals and category table side by side, status bar at the
//! bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Timestamp and anchor
    pub header: Rect,
    /// Seven unit figures plus spent this month
    pub totals: Rect,
    /// Per-category table
    pub categories: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44), // Totals (fixed width)
                Constraint::Min(40),    // Categories
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            totals: horizontal[0],
            categories: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

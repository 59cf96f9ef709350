//! TUI Views module
//!
//! Header, totals panel, category table and status bar.

pub mod categories;
pub mod header;
pub mod status_bar;
pub mod totals;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    totals::render(frame, app, layout.totals);
    categories::render(frame, app, layout.categories);
    status_bar::render(frame, app, layout.status_bar);
}

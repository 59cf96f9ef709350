//! Header view
//!
//! Current timestamp and the start of the accumulation period

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the header
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" burnrate ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = Line::from(vec![
        Span::styled(
            app.formatter.format_datetime(app.snapshot.evaluated_at),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled("Since ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.formatter.format_datetime(app.snapshot.anchor),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(" ({} days this month)", app.snapshot.days_in_month),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

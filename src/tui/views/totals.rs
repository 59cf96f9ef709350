//! Totals panel
//!
//! The seven unit figures for all expenses plus the amount spent so far this
//! month.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::unit_heading;
use crate::models::TimeUnit;
use crate::tui::app::App;

/// Render the totals panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Totals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let totals = &app.snapshot.totals;
    let mut lines = vec![
        Line::from(Span::styled(
            "Spent this month",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            app.formatter.format_money(totals.accumulated),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for unit in TimeUnit::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<17}", unit_heading(unit)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                app.formatter.format_money(totals.per(unit)),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Monthly total {}",
            app.formatter.format_money_with(app.snapshot.total_monthly, 2)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Category view
//!
//! Shows each category's monthly total, share, per-day cost and amount spent
//! this month

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TimeUnit;
use crate::tui::app::App;

/// Render the category table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.snapshot.categories.is_empty() {
        let text = Paragraph::new("No expenses. Run 'burnrate expense add' to add some.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let formatter = &app.formatter;
    let rows: Vec<Row> = app
        .snapshot
        .categories
        .iter()
        .map(|(name, category)| {
            let style = if category.monthly_total == 0.0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(name.clone()),
                Cell::from(formatter.format_money_with(category.monthly_total, 2)),
                Cell::from(formatter.format_percent(category.share)),
                Cell::from(formatter.format_money(category.figures.per(TimeUnit::Day))),
                Cell::from(formatter.format_money(category.figures.accumulated))
                    .style(Style::default().fg(Color::Yellow)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(12),    // Category
        Constraint::Length(14), // Monthly
        Constraint::Length(7),  // Share
        Constraint::Length(16), // Per day
        Constraint::Length(16), // This month
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Category").style(bold),
        Cell::from("Monthly").style(bold),
        Cell::from("Share").style(bold),
        Cell::from("Per day").style(bold),
        Cell::from("This month").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_category_index));

    frame.render_stateful_widget(table, area, &mut state);
}

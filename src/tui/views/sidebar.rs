//! Sidebar view
//!
//! Shows the month list with each month's balance. The selection here is
//! the dashboard's month selector.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Meses ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.dataset.is_empty() {
        let text = Paragraph::new("No months")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Build list items: month label left, balance right
    let items: Vec<ListItem> = app
        .dataset
        .iter()
        .map(|record| {
            let balance_str = record.balance.to_string();
            let balance_color = if record.balance.is_negative() {
                Color::Red
            } else {
                Color::Green
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<8}", truncate(&record.month, 8)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>12}", balance_str),
                    Style::default().fg(balance_color),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_month_index));

    frame.render_stateful_widget(list, area, &mut state);
}

//! TUI Views module
//!
//! Contains the dashboard views: the month sidebar, the summary panel
//! (cards, badges, alerts), the charts, and the status bar.

pub mod chart;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::layout::{AppLayout, MainPanelLayout};
use crate::reports::MonthSummary;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render sidebar
    sidebar::render(frame, app, layout.sidebar);

    // Render main panel for the selected month
    match app.selected_record() {
        Some(record) => {
            let summary = MonthSummary::generate(record);
            let main = MainPanelLayout::new(layout.main);
            summary::render_header(frame, &summary, main.header);
            summary::render_cards(frame, &summary, main.cards);
            summary::render_alerts(frame, &summary, main.alerts);
            chart::render(frame, &summary, main.charts);
        }
        None => {
            render_empty(frame, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);
}

/// Render the main panel when no month is available
fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Painel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new("No months loaded. Press 'r' to fetch the sheet.")
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(text, area);
}

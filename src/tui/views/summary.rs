//! Summary panel views
//!
//! Month header, the five summary cards with their badges, and the
//! alerts list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::reports::{MonthSummary, Severity};

/// Color for a severity, shared by cards and alerts
pub(super) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Good => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Critical => Color::Red,
        Severity::Neutral => Color::DarkGray,
    }
}

/// Render the month title header
pub fn render_header(frame: &mut Frame, summary: &MonthSummary, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Line::from(vec![
        Span::styled("Resumo do mês • ", Style::default().fg(Color::White)),
        Span::styled(
            summary.record.month.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   Receita Total: {}", summary.revenue_total),
            Style::default().fg(Color::White),
        ),
    ]);

    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Render the five summary cards side by side
pub fn render_cards(frame: &mut Frame, summary: &MonthSummary, area: Rect) {
    let cards = summary.cards();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20); 5])
        .split(area);

    for ((label, value, badge), chunk) in cards.into_iter().zip(chunks.iter()) {
        let value_color = if value.is_negative() {
            Color::Red
        } else {
            Color::White
        };

        let block = Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(value_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} {}", badge.severity.symbol(), badge.text),
                Style::default().fg(severity_color(badge.severity)),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}

/// Render the alerts list
pub fn render_alerts(frame: &mut Frame, summary: &MonthSummary, area: Rect) {
    let block = Block::default()
        .title(" Alertas ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = summary
        .alerts
        .iter()
        .map(|alert| {
            let color = severity_color(alert.severity);
            let line = Line::from(vec![
                Span::styled(
                    format!("{} {}", alert.severity.symbol(), alert.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", alert.detail),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

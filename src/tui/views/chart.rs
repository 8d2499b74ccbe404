//! Chart views
//!
//! The month's two charts: a bar chart of total revenue, expenses, and
//! balance, and a composition breakdown of the five card values.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem},
    Frame,
};

use crate::display::{format_bar, format_percentage};
use crate::reports::MonthSummary;
use crate::tui::layout::ChartsLayout;

/// Render both charts
pub fn render(frame: &mut Frame, summary: &MonthSummary, area: Rect) {
    let layout = ChartsLayout::new(area);
    render_bars(frame, summary, layout.bars);
    render_breakdown(frame, summary, layout.breakdown);
}

/// Render the value bar chart
///
/// Bar heights are clamped at zero; a negative balance shows as an empty
/// bar with its true value in the label.
fn render_bars(frame: &mut Frame, summary: &MonthSummary, area: Rect) {
    let block = Block::default()
        .title(" Valores do mês ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let colors = [Color::Cyan, Color::Red, Color::Green];
    let bars: Vec<Bar> = summary
        .bar_rows()
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| {
            Bar::default()
                .label(Line::from(label))
                .value(value.as_reais().max(0.0).round() as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
        })
        .collect();

    let bar_width = (area.width.saturating_sub(6) / 3).clamp(8, 20);
    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Render the composition breakdown with percentage bars
fn render_breakdown(frame: &mut Frame, summary: &MonthSummary, area: Rect) {
    let block = Block::default()
        .title(" Composição ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows = summary.breakdown_rows();
    let total: f64 = rows.iter().map(|(_, v)| v.abs().as_reais()).sum();
    let bar_width = (area.width.saturating_sub(30) as usize).clamp(5, 20);

    let colors = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Magenta,
    ];

    let items: Vec<ListItem> = rows
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| {
            let share = if total > 0.0 {
                value.abs().as_reais() / total * 100.0
            } else {
                0.0
            };
            let line = Line::from(vec![
                Span::styled(format!("{:<10}", label), Style::default().fg(Color::White)),
                Span::styled(
                    format!("{:>6} ", format_percentage(share)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format_bar(value.abs().as_reais(), total, bar_width),
                    Style::default().fg(color),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

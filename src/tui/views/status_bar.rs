//! Status bar view
//!
//! Shows the last refresh time, refresh errors, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    // Last refresh time
    match app.last_updated {
        Some(when) => {
            spans.push(Span::styled(
                " Atualizado: ",
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                when.format("%d/%m/%Y %H:%M").to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
        None => {
            spans.push(Span::styled(
                " Sem dados carregados",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    // Error or notice from the last refresh
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    // Key hints (right-aligned)
    let hints = " ↑/↓:Mês  r:Atualizar  q:Sair ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = hints.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}

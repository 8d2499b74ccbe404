//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar,
//! and the main panel's split into cards, alerts, and charts.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (month list)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into sidebar and content
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // Sidebar (fixed width)
                Constraint::Min(48),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the main panel
pub struct MainPanelLayout {
    /// Header area (month title)
    pub header: Rect,
    /// Summary cards row
    pub cards: Rect,
    /// Alerts area
    pub alerts: Rect,
    /// Charts area (bar chart + composition)
    pub charts: Rect,
}

impl MainPanelLayout {
    /// Calculate main panel layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Cards
                Constraint::Length(5), // Alerts
                Constraint::Min(8),    // Charts
            ])
            .split(area);

        Self {
            header: chunks[0],
            cards: chunks[1],
            alerts: chunks[2],
            charts: chunks[3],
        }
    }
}

/// Layout for the charts area: bar chart left, composition right
pub struct ChartsLayout {
    pub bars: Rect,
    pub breakdown: Rect,
}

impl ChartsLayout {
    /// Calculate charts layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self {
            bars: chunks[0],
            breakdown: chunks[1],
        }
    }
}

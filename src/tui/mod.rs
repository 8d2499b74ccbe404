//! Terminal User Interface module
//!
//! This module provides the interactive dashboard using ratatui: a
//! sidebar with the month list, summary cards with badges, alerts, and
//! the month's charts, plus a status bar with refresh feedback.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

pub use app::App;
pub use terminal::run_tui;

//! Key event handling
//!
//! Maps key presses to App state changes. The dashboard has no dialogs
//! or input fields; every key acts immediately.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::App;
use super::event::Event;

/// Handle one terminal event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        // Terminal redraws on its own after a resize; ticks carry no work
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle one key press
fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Release events arrive on some platforms; act on press only
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
        }
        KeyCode::Char('g') | KeyCode::End => {
            app.select_latest();
        }
        KeyCode::Char('r') => {
            app.refresh();
        }
        _ => {}
    }

    Ok(())
}

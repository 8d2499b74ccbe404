//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events. Month selection lives here, not in the dataset: the parsed
//! dataset is immutable and replaced wholesale on refresh.

use chrono::{DateTime, Local};

use crate::fetch::DataSource;
use crate::ingest::parse_sheet;
use crate::models::{Dataset, MonthlyRecord};

/// Main application state
pub struct App {
    /// Where refreshes read the sheet from
    pub source: DataSource,

    /// The currently displayed dataset
    pub dataset: Dataset,

    /// Index of the selected month in the dataset
    pub selected_month_index: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Transient message for the status bar (e.g. refresh errors)
    pub status_message: Option<String>,

    /// When the dataset was last replaced
    pub last_updated: Option<DateTime<Local>>,
}

impl App {
    /// Create the app around a source, with no data loaded yet
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            dataset: Dataset::default(),
            selected_month_index: 0,
            should_quit: false,
            status_message: None,
            last_updated: None,
        }
    }

    /// The currently selected month's record
    pub fn selected_record(&self) -> Option<&MonthlyRecord> {
        self.dataset.records().get(self.selected_month_index)
    }

    /// Move the selection one month up (towards the first row)
    pub fn select_previous(&mut self) {
        self.selected_month_index = self.selected_month_index.saturating_sub(1);
    }

    /// Move the selection one month down (towards the latest row)
    pub fn select_next(&mut self) {
        if self.selected_month_index + 1 < self.dataset.len() {
            self.selected_month_index += 1;
        }
    }

    /// Jump to the most recent month
    pub fn select_latest(&mut self) {
        self.selected_month_index = self.dataset.len().saturating_sub(1);
    }

    /// Re-fetch and re-parse the sheet, replacing the dataset wholesale
    ///
    /// On any failure the previous dataset stays on screen and the error
    /// is surfaced through the status bar. On success the selection
    /// follows the previously selected month label if it still exists,
    /// otherwise jumps to the latest month.
    pub fn refresh(&mut self) {
        let selected_label = self.selected_record().map(|r| r.month.clone());

        let result = self.source.load().and_then(|text| Ok(parse_sheet(&text)?));
        match result {
            Ok(dataset) => {
                self.dataset = dataset;
                self.selected_month_index = selected_label
                    .and_then(|label| {
                        self.dataset
                            .records()
                            .iter()
                            .position(|r| r.month == label)
                    })
                    .unwrap_or_else(|| self.dataset.len().saturating_sub(1));
                self.last_updated = Some(Local::now());
                self.status_message = None;
            }
            Err(err) => {
                self.status_message = Some(err.to_string());
            }
        }
    }
}

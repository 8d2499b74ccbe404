//! Display formatting for terminal output
//!
//! Provides utilities for formatting report output in the terminal:
//! bars, separators, percentages.

pub mod report;

pub use report::{double_separator, format_bar, format_percentage, separator, truncate};

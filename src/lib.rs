//! Painel CLI - Terminal-based personal finance dashboard
//!
//! This library provides the core functionality for the Painel dashboard,
//! a terminal front-end for a hand-maintained finance spreadsheet published
//! as CSV. It downloads the published sheet, parses it into monthly records,
//! and renders summary cards, status badges, alerts, and charts for a
//! selected month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, monthly records, dataset)
//! - `ingest`: Decoding and parsing of the published sheet text
//! - `fetch`: Retrieval of the sheet text (HTTP or local file)
//! - `reports`: Month summaries, badges, and alerts
//! - `display`: Terminal formatting helpers
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use painel_cli::ingest::parse_sheet;
//!
//! let dataset = parse_sheet(&csv_text)?;
//! let current = dataset.latest();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod ingest;
pub mod models;
pub mod reports;
pub mod tui;

pub use error::{PainelError, SchemaError};

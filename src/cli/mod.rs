//! CLI command handlers
//!
//! This module contains the implementation of one-shot CLI commands,
//! bridging the clap argument parsing with ingestion and reporting.

pub mod months;
pub mod show;

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::PainelResult;
use crate::fetch::DataSource;
use crate::ingest::parse_sheet;
use crate::models::Dataset;

pub use months::handle_months_command;
pub use show::{handle_show_command, OutputFormat};

/// Where to read the sheet from, shared by every data-driven command
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Published CSV link (overrides the configured one)
    #[arg(long, env = "PAINEL_SHEET_URL")]
    pub url: Option<String>,

    /// Local CSV export (takes precedence over any URL)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Resolve the source, load the sheet text, and parse it into a dataset
pub fn load_dataset(settings: &Settings, source: &SourceArgs) -> PainelResult<Dataset> {
    let source = DataSource::resolve(source.url.clone(), source.file.clone(), settings)?;
    let text = source.load()?;
    let dataset = parse_sheet(&text)?;
    Ok(dataset)
}

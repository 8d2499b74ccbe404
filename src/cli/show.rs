//! Show command
//!
//! Renders the dashboard for one month: summary cards with badges,
//! alerts, and the two charts, or the same data as JSON.

use chrono::Local;
use clap::{Args, ValueEnum};

use crate::cli::{load_dataset, SourceArgs};
use crate::config::Settings;
use crate::error::{PainelError, PainelResult};
use crate::reports::MonthSummary;

/// Output format for the show command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal report
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Month label to show (defaults to the most recent month)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Handle the show command
pub fn handle_show_command(settings: &Settings, args: ShowArgs) -> PainelResult<()> {
    let dataset = load_dataset(settings, &args.source)?;

    let record = match &args.month {
        Some(label) => dataset
            .find(label)
            .ok_or_else(|| PainelError::month_not_found(label.clone()))?,
        None => dataset.latest().ok_or_else(|| {
            PainelError::Validation("the sheet has a valid header but no data rows".into())
        })?,
    };

    let summary = MonthSummary::generate(record);

    match args.format {
        OutputFormat::Table => {
            println!("{}", summary.format_terminal());
            println!("Atualizado: {}", Local::now().format("%d/%m/%Y %H:%M"));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

//! Months command
//!
//! Lists every month of the sheet with its key figures, in sheet order.

use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::{load_dataset, SourceArgs};
use crate::config::Settings;
use crate::error::PainelResult;
use crate::models::MonthlyRecord;

/// Arguments for the months command
#[derive(Args, Debug)]
pub struct MonthsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// One table row per month
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Mês")]
    month: String,
    #[tabled(rename = "Despesas")]
    expenses: String,
    #[tabled(rename = "Receita Total")]
    revenue_total: String,
    #[tabled(rename = "Saldo")]
    balance: String,
    #[tabled(rename = "Restante")]
    remaining: String,
}

impl From<&MonthlyRecord> for MonthRow {
    fn from(record: &MonthlyRecord) -> Self {
        Self {
            month: record.month.clone(),
            expenses: record.expenses.to_string(),
            revenue_total: record.revenue_total().to_string(),
            balance: record.balance.to_string(),
            remaining: record.remaining.to_string(),
        }
    }
}

/// Handle the months command
pub fn handle_months_command(settings: &Settings, args: MonthsArgs) -> PainelResult<()> {
    let dataset = load_dataset(settings, &args.source)?;

    if dataset.is_empty() {
        println!("The sheet has a valid header but no months yet.");
        return Ok(());
    }

    let rows: Vec<MonthRow> = dataset.iter().map(MonthRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("{} month(s)", dataset.len());

    Ok(())
}

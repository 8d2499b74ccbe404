//! Month summary report
//!
//! Everything the dashboard shows for one month: the five card values,
//! total revenue, badges, alerts, and the data behind the two charts.
//! Generated fresh from a record; holds no reference back to the dataset.

use serde::Serialize;

use crate::display::{double_separator, format_bar, format_percentage, separator};
use crate::models::{Money, MonthlyRecord};
use crate::reports::health::{alerts_for, badges_for, Alert, Badge};

/// Width of the terminal report and its chart bars
const REPORT_WIDTH: usize = 72;
const BAR_WIDTH: usize = 30;

/// Summary of one month, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct MonthSummary {
    /// The record the summary was generated from
    #[serde(flatten)]
    pub record: MonthlyRecord,
    /// Received plus receivable
    pub revenue_total: Money,
    /// One badge per summary card
    pub badges: Vec<Badge>,
    /// The month's alerts
    pub alerts: Vec<Alert>,
}

impl MonthSummary {
    /// Generate the summary for one month's record
    pub fn generate(record: &MonthlyRecord) -> Self {
        Self {
            record: record.clone(),
            revenue_total: record.revenue_total(),
            badges: badges_for(record),
            alerts: alerts_for(record),
        }
    }

    /// Card values in display order, paired with their badges
    pub fn cards(&self) -> Vec<(&'static str, Money, &Badge)> {
        let r = &self.record;
        let values = [
            ("Despesas", r.expenses),
            ("A Receber", r.receivable),
            ("Recebido", r.received),
            ("Saldo", r.balance),
            ("Restante", r.remaining),
        ];
        values
            .into_iter()
            .zip(&self.badges)
            .map(|((label, value), badge)| (label, value, badge))
            .collect()
    }

    /// Rows of the value bar chart: total revenue, expenses, balance
    pub fn bar_rows(&self) -> [(&'static str, Money); 3] {
        [
            ("Receita Total", self.revenue_total),
            ("Despesas", self.record.expenses),
            ("Saldo", self.record.balance),
        ]
    }

    /// Rows of the composition breakdown: the five card values
    pub fn breakdown_rows(&self) -> [(&'static str, Money); 5] {
        let r = &self.record;
        [
            ("Despesas", r.expenses),
            ("A Receber", r.receivable),
            ("Recebido", r.received),
            ("Saldo", r.balance),
            ("Restante", r.remaining),
        ]
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("Resumo do mês • {}\n", self.record.month));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        // Cards with badges
        for (label, value, badge) in self.cards() {
            output.push_str(&format!(
                "{:<12} {:>16}   {} {}\n",
                label,
                value.to_string(),
                badge.severity.symbol(),
                badge.text
            ));
        }
        output.push_str(&format!(
            "{:<12} {:>16}\n",
            "Receita Total",
            self.revenue_total.to_string()
        ));

        // Alerts
        output.push('\n');
        output.push_str("Alertas\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for alert in &self.alerts {
            output.push_str(&format!(
                "  {} {}\n      {}\n",
                alert.severity.symbol(),
                alert.title,
                alert.detail
            ));
        }

        // Value bar chart
        output.push('\n');
        output.push_str("Valores do mês\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        let max_value = self
            .bar_rows()
            .iter()
            .map(|(_, v)| v.as_reais())
            .fold(0.0_f64, f64::max);
        for (label, value) in self.bar_rows() {
            output.push_str(&format!(
                "{:<14} {:>16}  {}\n",
                label,
                value.to_string(),
                format_bar(value.as_reais(), max_value, BAR_WIDTH)
            ));
        }

        // Composition breakdown
        output.push('\n');
        output.push_str("Composição\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        let total: f64 = self
            .breakdown_rows()
            .iter()
            .map(|(_, v)| v.abs().as_reais())
            .sum();
        for (label, value) in self.breakdown_rows() {
            let share = if total > 0.0 {
                value.abs().as_reais() / total * 100.0
            } else {
                0.0
            };
            output.push_str(&format!(
                "{:<14} {:>16}  {:>6}  {}\n",
                label,
                value.to_string(),
                format_percentage(share),
                format_bar(value.abs().as_reais(), total, BAR_WIDTH)
            ));
        }

        output
    }
}

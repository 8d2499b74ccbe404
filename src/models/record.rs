//! Monthly financial record
//!
//! One record per calendar month reported in the source sheet. Records are
//! built once per ingestion pass and never mutated afterwards; a refresh
//! produces a whole new dataset.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One parsed month's financial figures
///
/// The `month` label is the natural key within a dataset. The five amounts
/// are whatever the sheet reported; unparseable cells arrive here as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month label as written in the sheet (e.g. "Jan", "Fev")
    pub month: String,
    /// Total expenses for the month
    pub expenses: Money,
    /// Amounts still to be received
    pub receivable: Money,
    /// Amounts already received
    pub received: Money,
    /// End-of-month balance
    pub balance: Money,
    /// Open installments remaining
    pub remaining: Money,
}

impl MonthlyRecord {
    /// Total revenue: amounts received plus amounts still receivable
    ///
    /// This is the figure expenses are judged against in the health checks
    /// and the value bar chart.
    pub fn revenue_total(&self) -> Money {
        self.receivable + self.received
    }
}

//! Parsed dataset of monthly records
//!
//! An ordered sequence of records, in the order the sheet reported them.
//! The sheet is assumed chronological, so the last row is the current
//! month. The dataset is replaced wholesale on every refresh; month
//! selection state belongs to the presentation layer, not here.

use serde::{Deserialize, Serialize};

use super::record::MonthlyRecord;

/// Ordered collection of monthly records from one ingestion pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<MonthlyRecord>);

impl Dataset {
    /// Create a dataset from records already in sheet order
    pub fn new(records: Vec<MonthlyRecord>) -> Self {
        Self(records)
    }

    /// All records, in sheet order
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.0
    }

    /// Number of months in the dataset
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the dataset holds no months
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a record by its month label
    ///
    /// Tries an exact match first, then falls back to ASCII
    /// case-insensitive comparison so `jan` finds `Jan`.
    pub fn find(&self, month: &str) -> Option<&MonthlyRecord> {
        self.0
            .iter()
            .find(|r| r.month == month)
            .or_else(|| self.0.iter().find(|r| r.month.eq_ignore_ascii_case(month)))
    }

    /// The most recent month: the last row of the sheet
    pub fn latest(&self) -> Option<&MonthlyRecord> {
        self.0.last()
    }

    /// Month labels, in sheet order
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.month.as_str())
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyRecord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MonthlyRecord;
    type IntoIter = std::slice::Iter<'a, MonthlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<MonthlyRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = MonthlyRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

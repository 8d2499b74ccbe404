//! Sheet parsing and schema validation
//!
//! The published tab is plain comma-separated text: one header row naming
//! the columns, then one row per month. Fields are split naively on the
//! comma; the sheet carries no quoting, and a field containing a comma
//! corrupts column alignment for that row. That is an accepted limitation
//! of the source format, not something to paper over with a quoting CSV
//! reader.

use crate::error::SchemaError;
use crate::ingest::decode::decode_amount;
use crate::models::{Dataset, MonthlyRecord};

/// Column names the header must carry, case-insensitively, in any order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "mes",
    "despesas",
    "a_receber",
    "recebido",
    "saldo",
    "restante",
];

/// Resolved position of each required column in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    month: usize,
    expenses: usize,
    receivable: usize,
    received: usize,
    balance: usize,
    remaining: usize,
}

impl ColumnIndex {
    /// Locate every required column in the header line
    ///
    /// Header names are trimmed and lower-cased before matching; the first
    /// occurrence of a name wins. All missing columns are reported
    /// together so the sheet can be fixed in one pass.
    fn resolve(header: &str) -> Result<Self, SchemaError> {
        let names: Vec<String> = header
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .collect();
        let position = |name: &str| names.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns { columns: missing });
        }

        Ok(Self {
            month: position("mes").unwrap(),
            expenses: position("despesas").unwrap(),
            receivable: position("a_receber").unwrap(),
            received: position("recebido").unwrap(),
            balance: position("saldo").unwrap(),
            remaining: position("restante").unwrap(),
        })
    }
}

/// Parse the whole sheet text into a dataset of monthly records
///
/// Returns a [`SchemaError`] when there is no header row at all or when a
/// required column is absent. Everything else degrades instead of
/// failing: rows with a blank month label are dropped, and unparseable
/// amount cells decode to zero. Row order is preserved; a header with
/// zero data rows yields an empty dataset.
pub fn parse_sheet(text: &str) -> Result<Dataset, SchemaError> {
    let mut lines = text.lines().filter(|line| !line.is_empty());

    let header = lines.next().ok_or(SchemaError::MissingHeader)?;
    let columns = ColumnIndex::resolve(header)?;

    let records = lines
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            let cell = |index: usize| fields.get(index).copied();

            let month = cell(columns.month).unwrap_or("").trim();
            if month.is_empty() {
                return None;
            }

            Some(MonthlyRecord {
                month: month.to_string(),
                expenses: decode_amount(cell(columns.expenses)),
                receivable: decode_amount(cell(columns.receivable)),
                received: decode_amount(cell(columns.received)),
                balance: decode_amount(cell(columns.balance)),
                remaining: decode_amount(cell(columns.remaining)),
            })
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    const HEADER: &str = "mes,despesas,a_receber,recebido,saldo,restante";

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let dataset = parse_sheet(HEADER).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_empty_text_is_a_schema_error() {
        assert_eq!(parse_sheet("").unwrap_err(), SchemaError::MissingHeader);
        assert_eq!(parse_sheet("\n\n").unwrap_err(), SchemaError::MissingHeader);
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let text = "mes,despesas,a_receber,recebido,restante\nJan,1,2,3,4";
        match parse_sheet(text).unwrap_err() {
            SchemaError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["saldo".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_columns_reported_together() {
        match parse_sheet("foo,bar\nx,y").unwrap_err() {
            SchemaError::MissingColumns { columns } => {
                assert_eq!(columns.len(), REQUIRED_COLUMNS.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_is_case_and_order_insensitive() {
        let text = "SALDO, Restante ,MES,Despesas,A_Receber,Recebido\n\
                    10,5,Jan,100,20,30";
        let dataset = parse_sheet(text).unwrap();
        let record = dataset.latest().unwrap();
        assert_eq!(record.month, "Jan");
        assert_eq!(record.balance, Money::from_cents(1000));
        assert_eq!(record.remaining, Money::from_cents(500));
        assert_eq!(record.expenses, Money::from_cents(10_000));
    }

    #[test]
    fn test_rows_map_by_column_position() {
        let text = format!("{HEADER}\nJan,R$ 100,50,30,10,0");
        let dataset = parse_sheet(&text).unwrap();
        let record = dataset.latest().unwrap();
        // The naive comma split puts "R$ 100" in despesas and shifts the
        // remaining cells; values containing commas corrupt alignment by
        // contract.
        assert_eq!(record.month, "Jan");
        assert_eq!(record.expenses, Money::from_cents(10_000));
        assert_eq!(record.receivable, Money::from_cents(5_000));
    }

    #[test]
    fn test_blank_month_rows_are_dropped() {
        let text = format!("{HEADER}\nJan,1,1,1,1,1\n,2,2,2,2,2\n   ,3,3,3,3,3\nFev,4,4,4,4,4");
        let dataset = parse_sheet(&text).unwrap();
        let months: Vec<&str> = dataset.months().collect();
        assert_eq!(months, vec!["Jan", "Fev"]);
    }

    #[test]
    fn test_short_rows_decode_missing_cells_to_zero() {
        let text = format!("{HEADER}\nJan,100");
        let dataset = parse_sheet(&text).unwrap();
        let record = dataset.latest().unwrap();
        assert_eq!(record.expenses, Money::from_cents(10_000));
        assert_eq!(record.receivable, Money::zero());
        assert_eq!(record.remaining, Money::zero());
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = format!("{HEADER}\r\nJan,1,2,3,4,5\r\n\r\nFev,6,7,8,9,10\r\n");
        let dataset = parse_sheet(&text).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.latest().unwrap().month, "Fev");
    }

    #[test]
    fn test_order_preserved_and_parse_idempotent() {
        let text = format!("{HEADER}\nMar,1,1,1,1,1\nJan,2,2,2,2,2\nFev,3,3,3,3,3");
        let first = parse_sheet(&text).unwrap();
        let second = parse_sheet(&text).unwrap();
        let months: Vec<&str> = first.months().collect();
        // Input order, not calendar order
        assert_eq!(months, vec!["Mar", "Jan", "Fev"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_garbage_cells_decode_to_zero_without_failing_the_row() {
        let text = format!("{HEADER}\nJan,abc,R$ 50@,--,1.234,56,10");
        let dataset = parse_sheet(&text).unwrap();
        let record = dataset.latest().unwrap();
        assert_eq!(record.expenses, Money::zero());
        assert_eq!(record.receivable, Money::zero());
        assert_eq!(record.received, Money::zero());
        assert_eq!(record.balance, Money::from_cents(123_400));
    }
}

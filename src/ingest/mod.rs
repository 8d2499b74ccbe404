//! Ingestion of the published sheet
//!
//! Turns the raw CSV text of the published spreadsheet tab into a typed
//! dataset. Two stateless pieces: `decode` converts pt-BR formatted
//! amount cells into [`Money`](crate::models::Money), and `sheet` splits
//! the text into rows, validates the header schema, and maps each row
//! into a [`MonthlyRecord`](crate::models::MonthlyRecord).

pub mod decode;
pub mod sheet;

pub use decode::decode_amount;
pub use sheet::{parse_sheet, REQUIRED_COLUMNS};

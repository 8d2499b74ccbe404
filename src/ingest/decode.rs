//! Amount cell decoding
//!
//! The sheet is hand-maintained, so amount cells arrive in whatever shape
//! the spreadsheet produced: `R$ 1.234,56`, `-50,00`, plain `1234`, or
//! garbage. Decoding never fails; anything unparseable becomes zero so a
//! single bad cell cannot take down an otherwise valid month.

use crate::models::Money;

/// Decode one pt-BR formatted amount cell into Money
///
/// Accepts an optional `R$` prefix (with optional whitespace after it),
/// `.` as thousands separator and `,` as decimal separator. A leading
/// `-` is honored. Absent, empty, or unparseable cells decode to zero.
///
/// # Examples
/// ```
/// use painel_cli::ingest::decode_amount;
/// use painel_cli::models::Money;
///
/// assert_eq!(decode_amount(Some("R$ 1.234,56")), Money::from_cents(123_456));
/// assert_eq!(decode_amount(Some("abc")), Money::zero());
/// assert_eq!(decode_amount(None), Money::zero());
/// ```
pub fn decode_amount(cell: Option<&str>) -> Money {
    let raw = match cell {
        Some(s) => s.trim(),
        None => return Money::zero(),
    };
    if raw.is_empty() {
        return Money::zero();
    }

    // Strip the currency prefix, drop thousands dots, promote the first
    // comma to a decimal point.
    let stripped = raw.strip_prefix("R$").map(str::trim_start).unwrap_or(raw);
    let normalized = stripped.replace('.', "").replacen(',', ".", 1);

    cents_from_decimal(&normalized)
        .map(Money::from_cents)
        .unwrap_or_else(Money::zero)
}

/// Parse a normalized decimal string (`1234.56`, `-10`, `.5`) into centavos
///
/// Fractional digits beyond two are truncated; the sheet reports currency
/// amounts, which carry at most two.
fn cents_from_decimal(s: &str) -> Option<i64> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (whole, frac) = match unsigned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (unsigned, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let reais: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac[..2].parse().ok()?,
    };

    let total = reais.checked_mul(100)?.checked_add(cents)?;
    Some(if negative { -total } else { total })
}

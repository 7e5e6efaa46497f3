//! Resolution of mixed-representation date cells.
//!
//! The date column arrives as a mix of human-entered text and spreadsheet
//! day serials. Each variant is converted explicitly; a cell that resolves
//! to nothing stays `None` instead of failing the whole column.

use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;

use super::RawCell;

/// Day-serial reference date used by spreadsheet numeric dates.
static SHEET_EPOCH: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1899, 12, 30).unwrap());

/// Accepted text layouts, day-first. Two-digit-year forms come first so a
/// four-digit `%Y` never swallows a two-digit year as year 24.
const TEXT_FORMATS: [&str; 6] = [
    "%d/%m/%y",
    "%d-%m-%y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
];

/// Upper bound on accepted day serials (~year 2118).
const MAX_SERIAL: f64 = 80_000.0;

/// Converts a column of raw cells into positionally aligned dates. Text is
/// parsed day-first, numbers as day serials; unresolvable cells yield `None`.
pub fn resolve_dates(cells: &[RawCell]) -> Vec<Option<NaiveDate>> {
    cells
        .iter()
        .map(|cell| match cell {
            RawCell::Empty => None,
            RawCell::Text(text) => parse_text_date(text),
            RawCell::Number(serial) => serial_to_date(*serial),
        })
        .collect()
}

fn parse_text_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    TEXT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 || serial > MAX_SERIAL {
        return None;
    }
    Some(*SHEET_EPOCH + Duration::days(serial.trunc() as i64))
}

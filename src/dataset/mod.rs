//! Schema-on-read ingestion of the post-shipment workbook.

pub mod dates;

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;

use crate::errors::ReportError;

pub const DATE_COLUMN: &str = "LEO DATE";
pub const COUNTRY_COLUMN: &str = "COUNTRY";
pub const TYPE_COLUMN: &str = "INV TYPE";
pub const SUB_TYPE_COLUMN: &str = "SUB INV TYPE";
pub const QTY_COLUMN: &str = "QTY";
pub const VALUE_COLUMN: &str = "VALUE";
pub const CURRENCY_COLUMN: &str = "CURRENCY";

const REQUIRED_COLUMNS: [&str; 6] = [
    DATE_COLUMN,
    COUNTRY_COLUMN,
    TYPE_COLUMN,
    SUB_TYPE_COLUMN,
    QTY_COLUMN,
    VALUE_COLUMN,
];

/// A raw cell as ingested, before any typed interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
}

impl RawCell {
    fn text(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            RawCell::Number(value) => Some(value.to_string()),
        }
    }

    fn number(&self) -> Option<f64> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(text) => text.trim().replace(',', "").parse().ok(),
            RawCell::Number(value) => Some(*value),
        }
    }
}

impl From<&Data> for RawCell {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::String(text) => RawCell::Text(text.clone()),
            Data::Float(value) => RawCell::Number(*value),
            Data::Int(value) => RawCell::Number(*value as f64),
            Data::DateTime(stamp) => RawCell::Number(stamp.as_f64()),
            Data::DateTimeIso(text) | Data::DurationIso(text) => RawCell::Text(text.clone()),
            Data::Bool(_) | Data::Error(_) | Data::Empty => RawCell::Empty,
        }
    }
}

/// One row of the source sheet after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub leo_date: Option<NaiveDate>,
    pub country: String,
    pub inv_type: String,
    pub sub_inv_type: String,
    pub qty: Option<i64>,
    pub value: Option<f64>,
    pub currency: Option<String>,
}

/// An ordered collection of records sharing the normalized column schema.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Reads the named sheet of an Excel workbook. The first row supplies
    /// column headers; every following row becomes one record.
    pub fn load(path: &Path, sheet: &str) -> Result<Self, ReportError> {
        let mut workbook = open_workbook_auto(path)?;
        if !workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(ReportError::SheetNotFound(sheet.to_string()));
        }
        let range = workbook.worksheet_range(sheet)?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(row) => row
                .iter()
                .map(|cell| match cell {
                    Data::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect(),
            None => Vec::new(),
        };
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        let cells: Vec<Vec<RawCell>> = rows
            .map(|row| row.iter().map(RawCell::from).collect())
            .collect();

        Self::from_rows(&header_refs, cells)
    }

    /// Builds a dataset from in-memory headers and raw cell rows. This is
    /// the single normalization path shared with `load`: headers are trimmed
    /// and upper-cased, required columns validated, and the date column
    /// resolved positionally.
    pub fn from_rows(headers: &[&str], rows: Vec<Vec<RawCell>>) -> Result<Self, ReportError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|header| header.trim().to_uppercase())
            .collect();
        let index = |name: &str| normalized.iter().position(|header| header == name);

        let mut required = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = index(name).ok_or_else(|| ReportError::MissingColumn(name.to_string()))?;
        }
        let [date_idx, country_idx, type_idx, sub_type_idx, qty_idx, value_idx] = required;
        let currency_idx = index(CURRENCY_COLUMN);

        let date_cells: Vec<RawCell> = rows
            .iter()
            .map(|row| row.get(date_idx).cloned().unwrap_or(RawCell::Empty))
            .collect();
        let resolved = dates::resolve_dates(&date_cells);

        let records = rows
            .iter()
            .zip(resolved)
            .map(|(row, leo_date)| {
                let cell = |idx: usize| row.get(idx).cloned().unwrap_or(RawCell::Empty);
                Record {
                    leo_date,
                    country: cell(country_idx).text().unwrap_or_default(),
                    inv_type: cell(type_idx).text().unwrap_or_default(),
                    sub_inv_type: cell(sub_type_idx).text().unwrap_or_default(),
                    qty: cell(qty_idx).number().map(|value| value.round() as i64),
                    value: cell(value_idx).number(),
                    currency: currency_idx.and_then(|idx| cell(idx).text()),
                }
            })
            .collect();

        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

use leo_report::dataset::{Dataset, RawCell};

pub const HEADERS: [&str; 7] = [
    "LEO DATE",
    "COUNTRY",
    "INV TYPE",
    "SUB INV TYPE",
    "QTY",
    "VALUE",
    "CURRENCY",
];

/// Builds one raw sheet row; an empty currency string becomes an empty cell.
pub fn row(
    date: &str,
    country: &str,
    inv_type: &str,
    sub_type: &str,
    qty: f64,
    value: f64,
    currency: &str,
) -> Vec<RawCell> {
    vec![
        RawCell::Text(date.into()),
        RawCell::Text(country.into()),
        RawCell::Text(inv_type.into()),
        RawCell::Text(sub_type.into()),
        RawCell::Number(qty),
        RawCell::Number(value),
        if currency.is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(currency.into())
        },
    ]
}

pub fn dataset(rows: Vec<Vec<RawCell>>) -> Dataset {
    Dataset::from_rows(&HEADERS, rows).expect("valid dataset")
}

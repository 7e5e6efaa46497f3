//! Fixed-width rendering of aggregate rows into monospace reply blocks.

use super::aggregate::AggregateRow;

/// Cap on content lines per table: header, data rows, rule, and total.
pub const MAX_CONTENT_LINES: usize = 60;

const NAME_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 12;
const CRORE: f64 = 10_000_000.0;

/// Which aggregate family a table presents, and therefore which column it
/// formats: integer quantities or crore-scaled values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    VehicleQuantity,
    SparesValue,
}

impl SummaryKind {
    fn family(&self) -> &'static str {
        match self {
            SummaryKind::VehicleQuantity => "VEHICLE",
            SummaryKind::SparesValue => "SPARES",
        }
    }

    fn value_header(&self) -> &'static str {
        match self {
            SummaryKind::VehicleQuantity => "QTY",
            SummaryKind::SparesValue => "VALUE (CR)",
        }
    }

    fn cell(&self, row: &AggregateRow) -> String {
        match self {
            SummaryKind::VehicleQuantity => format_count(row.quantity_total),
            SummaryKind::SparesValue => format_crore(row.value_total),
        }
    }

    fn total(&self, rows: &[AggregateRow]) -> String {
        match self {
            SummaryKind::VehicleQuantity => {
                format_count(rows.iter().map(|row| row.quantity_total).sum())
            }
            SummaryKind::SparesValue => {
                format_crore(rows.iter().map(|row| row.value_total).sum())
            }
        }
    }
}

/// Renders one summary table: title line, fixed-width header, capped data
/// rows, a rule, and a TOTAL line summing the displayed column.
pub fn render_summary(
    kind: SummaryKind,
    rows: &[AggregateRow],
    month: u32,
    country: Option<&str>,
) -> String {
    let capped = &rows[..rows.len().min(MAX_CONTENT_LINES - 3)];

    let mut lines = Vec::with_capacity(capped.len() + 4);
    lines.push(title_line(kind, month, country));
    lines.push(format_line("SUB TYPE", kind.value_header()));
    for row in capped {
        lines.push(format_line(&row.sub_category, &kind.cell(row)));
    }
    lines.push(horizontal_rule());
    lines.push(format_line("TOTAL", &kind.total(capped)));
    lines.join("\n")
}

fn title_line(kind: SummaryKind, month: u32, country: Option<&str>) -> String {
    match country {
        Some(country) => format!("{} SUMMARY {:02} ({})", kind.family(), month, country),
        None => format!("{} SUMMARY {:02}", kind.family(), month),
    }
}

fn format_line(name: &str, value: &str) -> String {
    format!(
        "{:<name_width$} {:>value_width$}",
        fit_name(name),
        value,
        name_width = NAME_WIDTH,
        value_width = VALUE_WIDTH
    )
}

fn fit_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut fitted: String = name.chars().take(NAME_WIDTH - 1).collect();
    fitted.push('…');
    fitted
}

fn horizontal_rule() -> String {
    "-".repeat(NAME_WIDTH + 1 + VALUE_WIDTH)
}

fn format_count(value: i64) -> String {
    group_digits_signed(&value.to_string())
}

/// Scales a base-currency value into crore and renders two decimals.
fn format_crore(value: f64) -> String {
    let body = format!("{:.2}", value / CRORE);
    match body.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_digits_signed(int_part), frac),
        None => group_digits_signed(&body),
    }
}

fn group_digits_signed(digits: &str) -> String {
    match digits.strip_prefix('-') {
        Some(rest) => format!("-{}", group_digits(rest)),
        None => group_digits(digits),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_sign() {
        assert_eq!(format_count(1_234_567), "1,234,567");
        assert_eq!(format_count(-4200), "-4,200");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn crore_keeps_two_decimals() {
        assert_eq!(format_crore(3_000_000.0), "0.30");
        assert_eq!(format_crore(125_000_000.0), "12.50");
        assert_eq!(format_crore(12_345_000_000.0), "1,234.50");
    }
}

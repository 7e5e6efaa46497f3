//! Monthly filtering, grouping, and category-family aggregation.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::command::CommandRequest;
use crate::currency::RateTable;
use crate::dataset::Dataset;

/// Case-insensitive marker identifying the vehicle category family.
pub const VEHICLE_MARKER: &str = "VEHICLE";
/// Case-insensitive marker identifying the spares category family.
pub const SPARES_MARKER: &str = "SPARES";

/// Per-sub-category totals feeding one rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub sub_category: String,
    pub quantity_total: i64,
    pub value_total: f64,
}

/// Per-family aggregates for one month, sorted by sub-category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummaries {
    pub vehicles: Vec<AggregateRow>,
    pub spares: Vec<AggregateRow>,
}

/// Outcome of aggregating one report request.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateOutcome {
    /// No records matched the month/country filter.
    NoRowsForPeriod,
    /// Records matched the filter but none belonged to either family.
    NoCategoryData,
    Summaries(MonthlySummaries),
}

/// Filters the dataset to the requested month (and country, when given),
/// groups by (category, sub-category, currency), then collapses the groups
/// into the two family summaries.
pub fn aggregate_month(
    dataset: &Dataset,
    request: &CommandRequest,
    rates: &RateTable,
) -> AggregateOutcome {
    let filtered: Vec<_> = dataset
        .records()
        .iter()
        .filter(|record| record.leo_date.map(|date| date.month()) == Some(request.month))
        .filter(|record| match &request.country {
            Some(country) => record.country.eq_ignore_ascii_case(country),
            None => true,
        })
        .collect();

    if filtered.is_empty() {
        return AggregateOutcome::NoRowsForPeriod;
    }

    let mut groups: BTreeMap<(String, String, Option<String>), (i64, f64)> = BTreeMap::new();
    for record in filtered {
        let key = (
            record.inv_type.to_uppercase(),
            record.sub_inv_type.clone(),
            record.currency.as_ref().map(|code| code.to_uppercase()),
        );
        let totals = groups.entry(key).or_default();
        totals.0 += record.qty.unwrap_or(0);
        totals.1 += record.value.unwrap_or(0.0);
    }

    let mut vehicles: BTreeMap<String, i64> = BTreeMap::new();
    let mut spares: BTreeMap<String, f64> = BTreeMap::new();
    for ((category, sub_category, currency), (qty, value)) in groups {
        if category.contains(VEHICLE_MARKER) {
            // A category carrying both markers counts as vehicle only.
            *vehicles.entry(sub_category).or_default() += qty;
        } else if category.contains(SPARES_MARKER) {
            let rate = rates.multiplier(currency.as_deref());
            *spares.entry(sub_category).or_default() += value * rate;
        }
    }

    if vehicles.is_empty() && spares.is_empty() {
        return AggregateOutcome::NoCategoryData;
    }

    AggregateOutcome::Summaries(MonthlySummaries {
        vehicles: vehicles
            .into_iter()
            .map(|(sub_category, quantity_total)| AggregateRow {
                sub_category,
                quantity_total,
                value_total: 0.0,
            })
            .collect(),
        spares: spares
            .into_iter()
            .map(|(sub_category, value_total)| AggregateRow {
                sub_category,
                quantity_total: 0,
                value_total,
            })
            .collect(),
    })
}

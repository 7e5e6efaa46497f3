//! Report orchestration: one raw message in, zero or more reply units out.

pub mod aggregate;
pub mod render;

use crate::command::{parse_command, CommandRequest};
use crate::config::ReportConfig;
use crate::currency::RateTable;
use crate::dataset::Dataset;
use crate::errors::ReportError;

use aggregate::{aggregate_month, AggregateOutcome};
use render::{render_summary, SummaryKind};

/// Usage hint returned for malformed `/leo` commands.
pub const USAGE_HINT: &str = "Usage: /leoMM [COUNTRY] (MM = month 01-12)";

/// Reply to `/start`.
pub const READY_MESSAGE: &str = "Bot is running. Send /leoMM [COUNTRY] for a monthly summary.";

/// Entry point for one message. Walks parse, load, aggregate, and render;
/// every failure is recovered here and surfaced as a diagnostic reply, so
/// the hosting transport never sees an error or a panic.
pub fn respond(config: &ReportConfig, text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("/start") {
        return vec![READY_MESSAGE.to_string()];
    }

    match parse_command(trimmed) {
        Some(request) => {
            tracing::info!(
                month = request.month,
                country = ?request.country,
                "handling report command"
            );
            match generate(config, &request) {
                Ok(replies) => replies,
                Err(ReportError::MissingColumn(column)) => {
                    tracing::error!(%column, "required column missing from sheet");
                    vec![format!(
                        "The sheet is missing the required column `{column}`."
                    )]
                }
                Err(ReportError::SheetNotFound(sheet)) => {
                    tracing::error!(%sheet, "sheet not found in workbook");
                    vec![format!("Sheet `{sheet}` was not found in the workbook.")]
                }
                Err(err) => {
                    tracing::error!(error = %err, "report generation failed");
                    vec![
                        "There was an error generating the summary. Please try again later."
                            .to_string(),
                    ]
                }
            }
        }
        None if trimmed.starts_with('/') => vec![USAGE_HINT.to_string()],
        None => vec![format!("You said: {trimmed}")],
    }
}

fn generate(config: &ReportConfig, request: &CommandRequest) -> Result<Vec<String>, ReportError> {
    // Reload on every request; nothing is cached across invocations.
    let dataset = Dataset::load(&config.excel_path, &config.sheet_name)?;
    let rates = RateTable::new(config.base_currency.as_str(), config.rates.clone());
    Ok(monthly_report(&dataset, request, &rates))
}

/// Aggregates and renders one month. Pure with respect to IO, so tests can
/// drive it with an in-memory dataset.
pub fn monthly_report(
    dataset: &Dataset,
    request: &CommandRequest,
    rates: &RateTable,
) -> Vec<String> {
    match aggregate_month(dataset, request, rates) {
        AggregateOutcome::NoRowsForPeriod => vec![no_rows_message(request)],
        AggregateOutcome::NoCategoryData => {
            vec!["No vehicle or spares rows in the selected period.".to_string()]
        }
        AggregateOutcome::Summaries(summaries) => {
            let country = request.country.as_deref();
            let mut replies = Vec::new();
            if !summaries.vehicles.is_empty() {
                replies.push(fence(&render_summary(
                    SummaryKind::VehicleQuantity,
                    &summaries.vehicles,
                    request.month,
                    country,
                )));
            }
            if !summaries.spares.is_empty() {
                replies.push(fence(&render_summary(
                    SummaryKind::SparesValue,
                    &summaries.spares,
                    request.month,
                    country,
                )));
            }
            replies
        }
    }
}

fn no_rows_message(request: &CommandRequest) -> String {
    match &request.country {
        Some(country) => format!("No data found for {} in month {:02}.", country, request.month),
        None => format!("No data found for month {:02}.", request.month),
    }
}

/// Wraps a table in a monospace fence so transports render it verbatim.
fn fence(block: &str) -> String {
    format!("```\n{block}\n```")
}

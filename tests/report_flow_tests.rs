mod common;

use std::collections::HashMap;
use std::path::PathBuf;

use leo_report::command::CommandRequest;
use leo_report::config::ReportConfig;
use leo_report::currency::RateTable;
use leo_report::dataset::Dataset;
use leo_report::report::{monthly_report, respond, READY_MESSAGE, USAGE_HINT};

fn rates() -> RateTable {
    RateTable::new("INR", HashMap::new())
}

fn request(month: u32, country: Option<&str>) -> CommandRequest {
    CommandRequest {
        month,
        country: country.map(str::to_string),
    }
}

#[test]
fn emits_vehicle_then_spares_as_fenced_blocks() {
    let dataset = common::dataset(vec![
        common::row(
            "15/03/2024",
            "INDIA",
            "SPARES",
            "FILTER",
            0.0,
            1_000_000.0,
            "",
        ),
        common::row("15/03/2024", "INDIA", "VEHICLE", "TRUCK", 5.0, 0.0, ""),
    ]);
    let replies = monthly_report(&dataset, &request(3, None), &rates());

    assert_eq!(replies.len(), 2);
    assert!(replies[0].starts_with("```\n"));
    assert!(replies[0].ends_with("\n```"));
    assert!(replies[0].contains("VEHICLE SUMMARY 03"));
    assert!(replies[1].starts_with("```\n"));
    assert!(replies[1].contains("SPARES SUMMARY 03"));
}

#[test]
fn omits_the_table_for_an_empty_family() {
    let dataset = common::dataset(vec![common::row(
        "15/03/2024",
        "INDIA",
        "VEHICLE",
        "TRUCK",
        5.0,
        0.0,
        "",
    )]);
    let replies = monthly_report(&dataset, &request(3, None), &rates());
    assert_eq!(replies.len(), 1);
    assert!(replies[0].contains("VEHICLE SUMMARY 03"));
}

#[test]
fn end_to_end_vehicle_totals_match_the_sheet() {
    let dataset = common::dataset(vec![
        common::row("15/03/2024", "INDIA", "VEHICLE", "TRUCK", 5.0, 0.0, ""),
        common::row("20/03/2024", "NEPAL", "VEHICLE", "TRUCK", 7.0, 0.0, ""),
    ]);
    let replies = monthly_report(&dataset, &request(3, None), &rates());
    let table = &replies[0];
    assert!(table.contains("TRUCK"));
    let total_line = table
        .lines()
        .find(|line| line.starts_with("TOTAL"))
        .expect("total line");
    assert!(total_line.ends_with("12"));
}

#[test]
fn reports_no_rows_for_unmatched_period() {
    let dataset = common::dataset(vec![common::row(
        "15/03/2024",
        "INDIA",
        "VEHICLE",
        "TRUCK",
        5.0,
        0.0,
        "",
    )]);
    let replies = monthly_report(&dataset, &request(7, Some("INDIA")), &rates());
    assert_eq!(replies, vec!["No data found for INDIA in month 07.".to_string()]);
}

#[test]
fn reports_missing_category_data_distinctly() {
    let dataset = common::dataset(vec![common::row(
        "15/03/2024",
        "INDIA",
        "SERVICES",
        "AMC",
        1.0,
        900.0,
        "",
    )]);
    let replies = monthly_report(&dataset, &request(3, None), &rates());
    assert_eq!(
        replies,
        vec!["No vehicle or spares rows in the selected period.".to_string()]
    );
}

#[test]
fn missing_required_column_is_a_structural_error() {
    let headers = ["COUNTRY", "INV TYPE", "SUB INV TYPE", "QTY", "VALUE"];
    let err = Dataset::from_rows(&headers, Vec::new()).expect_err("missing column");
    assert!(err.to_string().contains("LEO DATE"));
}

#[test]
fn respond_covers_start_usage_echo_and_failure_paths() {
    let config = ReportConfig {
        excel_path: PathBuf::from("definitely-missing.xlsm"),
        ..ReportConfig::default()
    };

    assert_eq!(respond(&config, "/start"), vec![READY_MESSAGE.to_string()]);
    assert_eq!(respond(&config, "/leo99"), vec![USAGE_HINT.to_string()]);
    assert_eq!(
        respond(&config, "hello there"),
        vec!["You said: hello there".to_string()]
    );

    // A valid command against an unreadable workbook recovers to the
    // generic diagnostic instead of propagating the IO failure.
    let failure = respond(&config, "/leo07 INDIA");
    assert_eq!(failure.len(), 1);
    assert!(failure[0].contains("error generating the summary"));
}

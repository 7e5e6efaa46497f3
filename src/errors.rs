use thiserror::Error;

/// Error type that captures reporting pipeline failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("sheet `{0}` not found in workbook")]
    SheetNotFound(String),
    #[error("required column `{0}` missing from sheet")]
    MissingColumn(String),
    #[error("{0}")]
    InvalidArguments(String),
}

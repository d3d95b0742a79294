//! Error type for the gantt-sheets facade

use thiserror::Error;

use gantt_sheets_chart::ChartError;
use gantt_sheets_csv::CsvError;
use gantt_sheets_xlsx::XlsxError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading tables or building charts
#[derive(Debug, Error)]
pub enum Error {
    /// XLSX extraction failed
    #[error(transparent)]
    Xlsx(#[from] XlsxError),

    /// CSV reading or writing failed
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Chart construction failed
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Month tables or locale selection failed
    #[error(transparent)]
    Core(#[from] gantt_sheets_core::Error),

    /// Writing an output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension is not one we can read or write
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// True when the table held no row that parses as a task
    pub fn is_no_tasks(&self) -> bool {
        matches!(self, Error::Chart(ChartError::NoTasks))
    }
}

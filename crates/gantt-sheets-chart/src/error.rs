//! Chart error types

use thiserror::Error;

/// Result type for chart operations
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while building or rendering a chart
#[derive(Debug, Error)]
pub enum ChartError {
    /// No row had a task name with a valid start and end date
    #[error("No valid tasks found")]
    NoTasks,

    /// A color that is not `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Rasterizing the chart failed
    #[error("Failed to render PNG: {0}")]
    Render(String),

    /// Writing an output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

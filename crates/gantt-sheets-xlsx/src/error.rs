//! XLSX error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while extracting a table from an XLSX package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// The input file could not be opened
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a readable ZIP archive
    #[error("Invalid ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Missing required part
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A present part is not well-formed XML
    #[error("Malformed XML in {part}: {message}")]
    InvalidXml { part: String, message: String },

    /// A shared-string cell whose value is not an index
    #[error("Invalid shared string index '{0}'")]
    InvalidSharedStringIndex(String),

    /// A shared-string cell pointing past the end of the table
    #[error("Shared string index {index} out of range (table has {len} entries)")]
    SharedStringOutOfRange { index: usize, len: usize },
}

impl XlsxError {
    pub(crate) fn xml<E: std::fmt::Display>(part: &str, err: E) -> Self {
        XlsxError::InvalidXml {
            part: part.to_string(),
            message: err.to_string(),
        }
    }
}

//! Error types for gantt-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gantt-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// A month table was built with a month number outside 1-12
    #[error("Invalid month number {month} for token '{token}'")]
    InvalidMonth { token: String, month: u32 },

    /// A month table was built with an empty token
    #[error("Month tokens must not be empty")]
    EmptyMonthToken,

    /// Unknown locale name
    #[error("Unknown date locale: {0}")]
    UnknownLocale(String),
}

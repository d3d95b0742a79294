//! # gantt-sheets-csv
//!
//! CSV reader and writer for gantt-sheets tables.
//!
//! Rows are written as they are, ragged or not; fields containing the
//! delimiter, the quote character or a line break are quoted and inner quotes
//! are doubled.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;

//! # gantt-sheets-xlsx
//!
//! XLSX (Office Open XML) text extractor for gantt-sheets.
//!
//! Reads a single worksheet part and the shared-strings part directly from the
//! package, without loading or validating styles, themes or workbook metadata.

pub mod error;
pub mod options;
pub mod reader;

pub use error::{XlsxError, XlsxResult};
pub use options::{ExtractOptions, FIRST_WORKSHEET_PART, SHARED_STRINGS_PART};
pub use reader::{SharedStringTable, XlsxExtractor};

//! # gantt-sheets
//!
//! Turn Monday.com spreadsheet exports into Gantt charts.
//!
//! The pipeline has three stages, each in its own crate and re-exported here:
//!
//! - extraction: the first worksheet of an XLSX package becomes a [`Table`] of
//!   raw cell text ([`XlsxExtractor`]), or a CSV file is read back ([`CsvReader`])
//! - interpretation: rows become [`Task`]s once their `DD-<month>-YYYY` dates
//!   parse ([`DateParser`], [`ColumnMapping`])
//! - output: the tasks are laid out on a [`GanttChart`] and written as
//!   pgfgantt/TikZ ([`TikzWriter`]), SVG ([`SvgWriter`]) or PNG ([`PngWriter`])
//!
//! ## Example
//!
//! ```rust
//! use gantt_sheets::prelude::*;
//!
//! let table = Table::from(vec![
//!     vec!["Name".to_string(), "Start".to_string(), "End".to_string()],
//!     vec!["Design".to_string(), "05-janv.-2026".to_string(), "27-févr.-2026".to_string()],
//! ]);
//!
//! let chart = chart_from_table(&table, &GanttOptions::default()).unwrap();
//! let tikz = TikzWriter::render(&chart, &TikzOptions::default());
//! assert!(tikz.contains(r"\ganttbar{Design}{2026-01-05}{2026-02-27}"));
//!
//! // table.save_csv("export.csv").unwrap();
//! ```

mod error;
pub mod pipeline;
pub mod prelude;

pub use error::{Error, Result};
pub use pipeline::{
    chart_from_path, chart_from_table, default_output_path, xlsx_to_csv, GanttOptions,
};

// Re-export core types
pub use gantt_sheets_core::{
    extract_tasks, ColumnMapping, DateParser, MonthNames, ParsedDate, Row, Table, Task,
};

// Re-export chart types
pub use gantt_sheets_chart::{
    escape_latex, escape_xml, ChartError, Color, GanttChart, PngOptions, PngWriter, SvgOptions,
    SvgWriter, TikzOptions, TikzWriter, TimeAxis, MONDAY_GREEN,
};

// Re-export I/O types
pub use gantt_sheets_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};
pub use gantt_sheets_xlsx::{ExtractOptions, SharedStringTable, XlsxError, XlsxExtractor};

use std::path::Path;

/// Extension trait for [`Table`] to add file I/O
pub trait TableExt: Sized {
    /// Load a table from an `.xlsx`/`.xlsm` export or a `.csv` file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the table as CSV with default options
    fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl TableExt for Table {
    fn open<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") | Some("xlsm") => Ok(XlsxExtractor::extract_file(path)?),
            Some("csv") => Ok(CsvReader::read_file(path, &CsvReadOptions::default())?),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        CsvWriter::write_file(self, path, &CsvWriteOptions::default())?;
        Ok(())
    }
}

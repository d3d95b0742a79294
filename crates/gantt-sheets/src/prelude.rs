//! Prelude module - common imports for gantt-sheets users
//!
//! ```rust
//! use gantt_sheets::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    chart_from_path,
    chart_from_table,
    ColumnMapping,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    DateParser,
    // Error types
    Error,
    GanttChart,
    GanttOptions,
    MonthNames,
    PngOptions,
    PngWriter,
    Result,
    SvgOptions,
    SvgWriter,
    // Main types
    Table,
    // Extension traits
    TableExt,
    Task,
    TikzOptions,
    TikzWriter,
    XlsxExtractor,
};

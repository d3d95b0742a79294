//! # gantt-sheets-core
//!
//! Core data structures for the gantt-sheets pipeline.
//!
//! This crate provides the types shared by the readers, writers and chart code:
//! - [`Table`] - Rows of raw cell text, as extracted from a spreadsheet or CSV
//! - [`MonthNames`] and [`DateParser`] - Localized `DD-<month>-YYYY` date parsing
//! - [`Task`] and [`extract_tasks`] - Interpreting rows as name / start / end
//!
//! ## Example
//!
//! ```rust
//! use gantt_sheets_core::{extract_tasks, ColumnMapping, DateParser, Table};
//!
//! let table = Table::from(vec![
//!     vec!["Name".to_string(), "Start".to_string(), "End".to_string()],
//!     vec!["Design".to_string(), "05-janv.-2026".to_string(), "27-févr.-2026".to_string()],
//! ]);
//!
//! let tasks = extract_tasks(&table, &ColumnMapping::default(), &DateParser::default());
//! assert_eq!(tasks.len(), 1);
//! assert_eq!(tasks[0].interval_label(), "janv. 05 - févr. 27");
//! ```

pub mod date;
pub mod error;
pub mod table;
pub mod task;

// Re-exports for convenience
pub use date::{DateParser, MonthNames, ParsedDate};
pub use error::{Error, Result};
pub use table::{Row, Table};
pub use task::{extract_tasks, ColumnMapping, Task};

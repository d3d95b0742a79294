//! Task rows - interpreting table columns as name / start / end

use chrono::NaiveDate;

use crate::date::{DateParser, ParsedDate};
use crate::table::{Row, Table};

/// Which columns hold the task name and its dates (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Task name column
    pub name: usize,
    /// Start date column
    pub start: usize,
    /// End date column
    pub end: usize,
}

impl ColumnMapping {
    /// Minimum row length needed to read every mapped column, or `None`
    /// when a column index is too large for any row to reach.
    pub fn min_width(&self) -> Option<usize> {
        self.name.max(self.start).max(self.end).checked_add(1)
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            name: 0,
            start: 1,
            end: 2,
        }
    }
}

/// A task with a parsed start and end date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Task name, trimmed
    pub name: String,
    /// Start date as parsed
    pub start: ParsedDate,
    /// End date as parsed
    pub end: ParsedDate,
}

impl Task {
    /// Start date
    pub fn start_date(&self) -> NaiveDate {
        self.start.date
    }

    /// End date
    pub fn end_date(&self) -> NaiveDate {
        self.end.date
    }

    /// Interval label built from the source tokens, e.g. `janv. 05 - févr. 27`
    pub fn interval_label(&self) -> String {
        format!("{} - {}", self.start.label(), self.end.label())
    }

    /// Interpret one row, returning `None` when it is too short or either
    /// date does not parse.
    pub fn from_row(row: &Row, columns: &ColumnMapping, parser: &DateParser) -> Option<Self> {
        let start = parser.parse_parts(row.get(columns.start)?)?;
        let end = parser.parse_parts(row.get(columns.end)?)?;
        let name = row.get(columns.name)?;
        Some(Self {
            name: name.trim().to_string(),
            start,
            end,
        })
    }
}

/// Interpret every row of a table as a task, in source order.
///
/// Rows that are too short or whose dates fail to parse are dropped; header
/// rows and group separators of an export fall out this way.
pub fn extract_tasks(table: &Table, columns: &ColumnMapping, parser: &DateParser) -> Vec<Task> {
    let mut tasks = Vec::new();
    for (idx, row) in table.rows().iter().enumerate() {
        match Task::from_row(row, columns, parser) {
            Some(task) => tasks.push(task),
            None => log::debug!("Skipping row {idx}: no task name and dates"),
        }
    }
    log::debug!("Parsed {} tasks from {} rows", tasks.len(), table.len());
    tasks
}

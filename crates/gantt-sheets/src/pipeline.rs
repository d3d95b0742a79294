//! End-to-end helpers: export file to table, table to chart

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::TableExt;
use gantt_sheets_chart::GanttChart;
use gantt_sheets_core::{extract_tasks, ColumnMapping, DateParser, MonthNames, Table};
use gantt_sheets_csv::{CsvWriteOptions, CsvWriter};
use gantt_sheets_xlsx::XlsxExtractor;

/// How rows are turned into tasks
#[derive(Debug, Clone, Default)]
pub struct GanttOptions {
    /// Columns holding the task name and its dates
    pub columns: ColumnMapping,
    /// Date parser (French then English month names by default)
    pub dates: DateParser,
}

impl GanttOptions {
    /// Options for one language code (`fr`, `en`) or `any` for the default
    /// French then English lookup
    pub fn for_locale(code: &str) -> Result<Self> {
        let dates = if code.eq_ignore_ascii_case("any") {
            DateParser::default()
        } else {
            DateParser::with_locale(MonthNames::by_code(code)?)
        };
        Ok(Self::default().with_dates(dates))
    }

    /// Use the given date parser
    pub fn with_dates(mut self, dates: DateParser) -> Self {
        self.dates = dates;
        self
    }

    /// Use the given column mapping
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }
}

/// Build a chart from the rows of a table.
///
/// Rows without a task name and two parseable dates are skipped. Fails with
/// [`ChartError::NoTasks`](gantt_sheets_chart::ChartError::NoTasks) when
/// nothing is left.
pub fn chart_from_table(table: &Table, options: &GanttOptions) -> Result<GanttChart> {
    let tasks = extract_tasks(table, &options.columns, &options.dates);
    let skipped = table.len() - tasks.len();
    if skipped > 0 {
        log::warn!("Skipped {skipped} of {} rows without valid task dates", table.len());
    }
    Ok(GanttChart::new(tasks)?)
}

/// Open an `.xlsx`/`.xlsm`/`.csv` file and build a chart from it
pub fn chart_from_path<P: AsRef<Path>>(path: P, options: &GanttOptions) -> Result<GanttChart> {
    let table = Table::open(path)?;
    chart_from_table(&table, options)
}

/// Extract the first worksheet of `input` and write it as CSV to `output`.
///
/// Returns the extracted table.
pub fn xlsx_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &CsvWriteOptions,
) -> Result<Table> {
    let table = XlsxExtractor::extract_file(input)?;
    CsvWriter::write_file(&table, output, options)?;
    Ok(table)
}

/// `input` with its extension replaced by `extension`, e.g. `plan.xlsx` to `plan.tikz`
pub fn default_output_path<P: AsRef<Path>>(input: P, extension: &str) -> PathBuf {
    input.as_ref().with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn table(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_chart_from_table_skips_headers() {
        let table = table(&[
            &["Roadmap"],
            &["Name", "Start", "End"],
            &["Design", "05-janv.-2026", "27-févr.-2026"],
            &["Build", "02-mars-2026", "15-mai-2026"],
        ]);

        let chart = chart_from_table(&table, &GanttOptions::default()).unwrap();
        let names: Vec<&str> = chart.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Design", "Build"]);
    }

    #[test]
    fn test_chart_from_table_without_tasks() {
        let table = table(&[&["Name", "Start", "End"]]);
        let err = chart_from_table(&table, &GanttOptions::default()).unwrap_err();
        assert!(err.is_no_tasks());
        assert_eq!(err.to_string(), "No valid tasks found");
    }

    #[test]
    fn test_single_locale() {
        let table = table(&[
            &["Design", "05-janv.-2026", "27-févr.-2026"],
            &["Build", "02-Mar-2026", "15-May-2026"],
        ]);
        let options =
            GanttOptions::default().with_dates(DateParser::with_locale(MonthNames::english()));

        let chart = chart_from_table(&table, &options).unwrap();
        assert_eq!(chart.tasks().len(), 1);
        assert_eq!(chart.tasks()[0].name, "Build");
    }

    #[test]
    fn test_for_locale() {
        let table = table(&[
            &["Design", "05-janv.-2026", "27-févr.-2026"],
            &["Build", "02-Mar-2026", "15-May-2026"],
        ]);

        let french = GanttOptions::for_locale("fr").unwrap();
        assert_eq!(chart_from_table(&table, &french).unwrap().tasks()[0].name, "Design");
        assert_eq!(chart_from_table(&table, &french).unwrap().tasks().len(), 1);

        let any = GanttOptions::for_locale("ANY").unwrap();
        assert_eq!(chart_from_table(&table, &any).unwrap().tasks().len(), 2);

        let err = GanttOptions::for_locale("de").unwrap_err();
        assert!(matches!(
            err,
            Error::Core(gantt_sheets_core::Error::UnknownLocale(ref code)) if code == "de"
        ));
    }

    #[test]
    fn test_custom_columns() {
        let table = table(&[&["1", "05-Jan-2026", "Design", "27-Feb-2026"]]);
        let options = GanttOptions::default().with_columns(ColumnMapping {
            name: 2,
            start: 1,
            end: 3,
        });

        let chart = chart_from_table(&table, &options).unwrap();
        assert_eq!(chart.tasks()[0].name, "Design");
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path("exports/plan.xlsx", "tikz"),
            PathBuf::from("exports/plan.tikz")
        );
        assert_eq!(default_output_path("plan", "svg"), PathBuf::from("plan.svg"));
        assert_eq!(
            default_output_path("v1.2/plan.v3.xlsx", "csv"),
            PathBuf::from("v1.2/plan.v3.csv")
        );
    }
}

//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use gantt_sheets_core::Table;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a table to a writer, one record per row
    pub fn write<W: Write>(table: &Table, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        for row in table.rows() {
            csv_writer.write_record(row)?;
        }

        csv_writer.flush()?;
        log::debug!("Wrote {} CSV records", table.len());
        Ok(())
    }

    /// Write a table to a string
    pub fn write_string(table: &Table, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(table, &mut buf, options)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &[&[&str]]) -> Table {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_write_plain_rows() {
        let table = table(&[&["Task A", "01-Jan-2026", "15-Jan-2026"], &["Task B", "", "x"]]);
        let out = CsvWriter::write_string(&table, &CsvWriteOptions::default()).unwrap();
        assert_eq!(out, "Task A,01-Jan-2026,15-Jan-2026\r\nTask B,,x\r\n");
    }

    #[test]
    fn test_write_escapes_special_fields() {
        let table = table(&[&["a,b", "say \"hi\"", "line1\nline2", "plain"]]);
        let out = CsvWriter::write_string(&table, &CsvWriteOptions::default()).unwrap();
        assert_eq!(
            out,
            "\"a,b\",\"say \"\"hi\"\"\",\"line1\nline2\",plain\r\n"
        );
    }

    #[test]
    fn test_write_ragged_rows() {
        let table = table(&[&["a", "b", "c"], &["d"], &["e", "f"]]);
        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        let out = CsvWriter::write_string(&table, &options).unwrap();
        assert_eq!(out, "a,b,c\nd\ne,f\n");
    }

    #[test]
    fn test_write_custom_delimiter() {
        let table = table(&[&["a;b", "c"]]);
        let options = CsvWriteOptions::default().with_delimiter(';').unwrap();
        let out = CsvWriter::write_string(&table, &options).unwrap();
        assert_eq!(out, "\"a;b\";c\r\n");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = table(&[&["x", "y"]]);

        CsvWriter::write_file(&table, &path, &CsvWriteOptions::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x,y\r\n");
    }
}

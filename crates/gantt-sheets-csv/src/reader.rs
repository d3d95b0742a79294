//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use gantt_sheets_core::Table;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a table.
    ///
    /// Fields are kept as text and rows keep their own length.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut table = Table::new();
        for result in csv_reader.records() {
            let record = result?;
            table.push_row(record.iter().map(str::to_string).collect());
        }

        log::debug!("Read {} CSV records", table.len());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsvWriteOptions, CsvWriter};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_ragged_rows() {
        let data = "Roadmap\r\nName,Start,End\r\nDesign,05-janv.-2026,27-févr.-2026\r\n";
        let table = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.row(0).unwrap(), &vec!["Roadmap".to_string()]);
        assert_eq!(table.cell(2, 1), Some("05-janv.-2026"));
    }

    #[test]
    fn test_read_quoted_fields() {
        let data = "\"a,b\",\"say \"\"hi\"\"\",\"line1\nline2\"\n";
        let table = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(table.cell(0, 0), Some("a,b"));
        assert_eq!(table.cell(0, 1), Some("say \"hi\""));
        assert_eq!(table.cell(0, 2), Some("line1\nline2"));
    }

    #[test]
    fn test_read_skips_header_when_asked() {
        let data = "Name,Start,End\nA,1,2\n";
        let options = CsvReadOptions {
            has_header: true,
            ..Default::default()
        };
        let table = CsvReader::read(data.as_bytes(), &options).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), Some("A"));
    }

    #[test]
    fn test_written_table_reads_back() {
        let table: Table = vec![
            vec!["Plan, review".to_string(), "\"quoted\"".to_string()],
            vec!["x".to_string()],
        ]
        .into();

        let text = CsvWriter::write_string(&table, &CsvWriteOptions::default()).unwrap();
        let back = CsvReader::read(text.as_bytes(), &CsvReadOptions::default()).unwrap();
        assert_eq!(back, table);
    }
}

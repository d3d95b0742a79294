//! Table type - rows of raw cell text

/// A single row of cell text, left to right as stored in the source.
pub type Row = Vec<String>;

/// Ordered rows of text extracted from a spreadsheet or delimited file.
///
/// Rows keep the cells that were present in the source and nothing more,
/// so two rows may have different lengths. No value is interpreted: numbers
/// and dates stay exactly as their stored text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// All rows in source order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by index (0-based)
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a cell's text by row and column index (0-based)
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let table = Table::from(vec![row(&["a", "b", "c"]), row(&["d"]), row(&[])]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.max_width(), 3);
        assert_eq!(table.row(1).unwrap().len(), 1);
        assert!(table.row(2).unwrap().is_empty());
    }

    #[test]
    fn test_cell_lookup() {
        let mut table = Table::new();
        table.push_row(row(&["Task A", "01-Jan-2026"]));

        assert_eq!(table.cell(0, 0), Some("Task A"));
        assert_eq!(table.cell(0, 1), Some("01-Jan-2026"));
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.cell(1, 0), None);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.max_width(), 0);
        assert!(table.into_rows().is_empty());
    }
}

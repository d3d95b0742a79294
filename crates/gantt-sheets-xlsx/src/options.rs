//! Extraction options

/// Default location of the shared-strings part
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Default location of the first worksheet part
pub const FIRST_WORKSHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Which parts of the package to read.
///
/// Only these two parts are ever opened. Workbook metadata, relationships,
/// styles and themes are never read, so damage in those parts does not
/// affect extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Shared-strings part (optional in the package)
    pub shared_strings_part: String,
    /// Worksheet part (required in the package)
    pub worksheet_part: String,
}

impl ExtractOptions {
    /// Read a different worksheet part, e.g. `xl/worksheets/sheet2.xml`
    pub fn with_worksheet_part<S: Into<String>>(mut self, part: S) -> Self {
        self.worksheet_part = part.into();
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            shared_strings_part: SHARED_STRINGS_PART.to_string(),
            worksheet_part: FIRST_WORKSHEET_PART.to_string(),
        }
    }
}

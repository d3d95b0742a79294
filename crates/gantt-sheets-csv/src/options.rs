//! CSV options

use crate::error::{CsvError, CsvResult};

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Skip the first record (default: false, every row is kept)
    pub has_header: bool,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: false,
        }
    }
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl CsvWriteOptions {
    /// Use a delimiter given as a `char`, e.g. from the command line.
    ///
    /// The delimiter must be ASCII and differ from the quote character and
    /// from line breaks.
    pub fn with_delimiter(mut self, delimiter: char) -> CsvResult<Self> {
        let byte = ascii_byte("delimiter", delimiter)?;
        let reason = match byte {
            b'\r' | b'\n' => Some("line breaks end records"),
            b if b == self.quote => Some("it is the quote character"),
            _ => None,
        };
        if let Some(reason) = reason {
            return Err(CsvError::InvalidCharacter {
                what: "delimiter",
                ch: delimiter,
                reason,
            });
        }
        self.delimiter = byte;
        Ok(self)
    }
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::CRLF,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

fn ascii_byte(what: &'static str, ch: char) -> CsvResult<u8> {
    if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(CsvError::InvalidCharacter {
            what,
            ch,
            reason: "must be a single ASCII character",
        })
    }
}

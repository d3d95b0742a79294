//! XLSX extractor
//!
//! Reads the cell text of one worksheet straight from the package's XML parts.
//! The archive is treated as a bag of named parts: only the shared-strings part
//! and the worksheet part are opened, and no workbook model is built, so a
//! package with broken styles or metadata still extracts.

mod shared_strings;

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use zip::result::ZipError;

use crate::error::{XlsxError, XlsxResult};
use crate::options::ExtractOptions;
use gantt_sheets_core::{Row, Table};

pub use shared_strings::SharedStringTable;
use shared_strings::decode_excel_escapes;

/// XLSX text extractor
pub struct XlsxExtractor;

impl XlsxExtractor {
    /// Extract the first worksheet of a package file
    pub fn extract_file<P: AsRef<Path>>(path: P) -> XlsxResult<Table> {
        Self::extract_file_with_options(path, &ExtractOptions::default())
    }

    /// Extract a package file using the given options
    pub fn extract_file_with_options<P: AsRef<Path>>(
        path: P,
        options: &ExtractOptions,
    ) -> XlsxResult<Table> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| XlsxError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Extracting {}", path.display());
        Self::extract_with_options(file, options)
    }

    /// Extract the first worksheet from a reader
    pub fn extract<R: Read + Seek>(reader: R) -> XlsxResult<Table> {
        Self::extract_with_options(reader, &ExtractOptions::default())
    }

    /// Extract from a reader using the given options
    pub fn extract_with_options<R: Read + Seek>(
        reader: R,
        options: &ExtractOptions,
    ) -> XlsxResult<Table> {
        let mut archive = zip::ZipArchive::new(reader)?;

        let shared_strings = Self::read_shared_strings(&mut archive, &options.shared_strings_part)?;
        Self::read_worksheet(&mut archive, &options.worksheet_part, &shared_strings)
    }

    /// Read the shared strings table; a package without one has an empty table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        part: &str,
    ) -> XlsxResult<SharedStringTable> {
        let file = match archive.by_name(part) {
            Ok(f) => f,
            Err(ZipError::FileNotFound) => {
                log::debug!("No {part} in package");
                return Ok(SharedStringTable::default());
            }
            Err(e) => return Err(e.into()),
        };

        SharedStringTable::parse(BufReader::new(file), part)
    }

    /// Read a worksheet part into a table
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        part: &str,
        shared_strings: &SharedStringTable,
    ) -> XlsxResult<Table> {
        let file = match archive.by_name(part) {
            Ok(f) => f,
            Err(ZipError::FileNotFound) => return Err(XlsxError::MissingPart(part.to_string())),
            Err(e) => return Err(e.into()),
        };

        let table = read_sheet_data(BufReader::new(file), part, shared_strings)?;
        log::debug!("Read {} rows from {part}", table.len());
        Ok(table)
    }
}

/// State of the cell currently being read
#[derive(Debug, Default)]
struct CellState {
    cell_type: Option<String>,
    value: Option<String>,
    inline_text: Option<String>,
}

impl CellState {
    fn from_start(e: &BytesStart<'_>, part: &str) -> XlsxResult<Self> {
        let mut cell = CellState::default();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| XlsxError::xml(part, err))?;
            if attr.key.local_name().as_ref() == b"t" {
                let value = attr
                    .unescape_value()
                    .map_err(|err| XlsxError::xml(part, err))?;
                cell.cell_type = Some(value.into_owned());
            }
        }
        Ok(cell)
    }

    /// Resolve the cell to its text.
    ///
    /// A cell without a value is empty text. Shared-string cells are looked up
    /// by index; inline strings use their own text; every other type (numbers,
    /// booleans, errors, formula strings, ISO dates) is kept as stored.
    fn resolve(self, shared_strings: &SharedStringTable) -> XlsxResult<String> {
        match self.cell_type.as_deref() {
            Some("s") => match self.value {
                Some(raw) => shared_strings.resolve(&raw).map(str::to_string),
                None => Ok(String::new()),
            },
            Some("inlineStr") => Ok(self
                .inline_text
                .or(self.value)
                .map(|text| decode_excel_escapes(&text))
                .unwrap_or_default()),
            _ => Ok(self.value.unwrap_or_default()),
        }
    }
}

/// Walk `row`/`c` elements of a worksheet in document order.
fn read_sheet_data<R: BufRead>(
    reader: R,
    part: &str,
    shared_strings: &SharedStringTable,
) -> XlsxResult<Table> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.trim_text(false);

    let mut buf = Vec::new();
    let mut table = Table::new();
    let mut depth = 0usize;

    let mut current_row: Option<Row> = None;
    let mut current_cell: Option<CellState> = None;
    let mut in_value = false;
    let mut in_inline_str = false;
    let mut in_inline_text = false;
    let mut phonetic_depth = 0usize;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"row" => current_row = Some(Row::new()),
                    b"c" if current_row.is_some() => {
                        current_cell = Some(CellState::from_start(&e, part)?);
                    }
                    b"v" => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.value = Some(String::new());
                            in_value = true;
                        }
                    }
                    b"is" => {
                        if let Some(cell) = current_cell.as_mut() {
                            cell.inline_text = Some(String::new());
                            in_inline_str = true;
                        }
                    }
                    b"rPh" if in_inline_str => phonetic_depth += 1,
                    b"t" if in_inline_str && phonetic_depth == 0 => in_inline_text = true,
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"row" => table.push_row(Row::new()),
                b"c" => {
                    if let Some(row) = current_row.as_mut() {
                        let cell = CellState::from_start(&e, part)?;
                        row.push(cell.resolve(shared_strings)?);
                    }
                }
                b"v" => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.value = Some(String::new());
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => {
                depth = depth.saturating_sub(1);
                match e.local_name().as_ref() {
                    b"row" => {
                        if let Some(row) = current_row.take() {
                            table.push_row(row);
                        }
                    }
                    b"c" => {
                        if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut())
                        {
                            row.push(cell.resolve(shared_strings)?);
                        }
                    }
                    b"v" => in_value = false,
                    b"is" => in_inline_str = false,
                    b"rPh" if phonetic_depth > 0 => phonetic_depth -= 1,
                    b"t" => in_inline_text = false,
                    _ => {}
                }
            }
            Ok(Event::Text(e)) if in_value || in_inline_text => {
                let text = e.unescape().map_err(|err| XlsxError::xml(part, err))?;
                push_text(&mut current_cell, in_value, &text);
            }
            Ok(Event::CData(e)) if in_value || in_inline_text => {
                let text = std::str::from_utf8(&e).map_err(|err| XlsxError::xml(part, err))?;
                push_text(&mut current_cell, in_value, text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::xml(part, e)),
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(XlsxError::xml(part, "unexpected end of document"));
    }

    Ok(table)
}

fn push_text(cell: &mut Option<CellState>, in_value: bool, text: &str) {
    let Some(cell) = cell.as_mut() else {
        return;
    };
    let target = if in_value {
        cell.value.as_mut()
    } else {
        cell.inline_text.as_mut()
    };
    if let Some(target) = target {
        target.push_str(text);
    }
}

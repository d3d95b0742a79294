//! Shared-strings table

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel writes characters that XML cannot carry as `_xHHHH_`:
/// - `_x000d_` = CR
/// - `_x000a_` = LF
/// - `_x0009_` = Tab
/// - `_x005f_` = literal underscore (escapes an `_x` that is real text)
pub(crate) fn decode_excel_escapes(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        match decode_one_escape(candidate) {
            Some(ch) => {
                result.push(ch);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Decode a `_xHHHH_` sequence at the start of `s`.
fn decode_one_escape(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || bytes[6] != b'_' || !bytes[2..6].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u32::from_str_radix(&s[2..6], 16)
        .ok()
        .and_then(char::from_u32)
}

/// Ordered strings from the package's shared-strings part.
///
/// Cells of type `s` store an index into this table instead of their text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStringTable {
    strings: Vec<String>,
}

impl SharedStringTable {
    /// Parse a shared-strings part.
    ///
    /// Each `si` contributes one entry: the concatenated text of its `t`
    /// elements (plain or rich-text runs), with phonetic runs (`rPh`) left out.
    /// An `si` without text yields an empty string.
    pub fn parse<R: BufRead>(reader: R, part: &str) -> XlsxResult<Self> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut strings = Vec::new();
        let mut current = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut phonetic_depth = 0usize;
        let mut depth = 0usize;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    match e.local_name().as_ref() {
                        b"si" => {
                            in_si = true;
                            current.clear();
                        }
                        b"rPh" if in_si => phonetic_depth += 1,
                        b"t" if in_si && phonetic_depth == 0 => in_t = true,
                        _ => {}
                    }
                }
                Ok(Event::Empty(e)) => {
                    if e.local_name().as_ref() == b"si" {
                        strings.push(String::new());
                    }
                }
                Ok(Event::End(e)) => {
                    depth = depth.saturating_sub(1);
                    match e.local_name().as_ref() {
                        b"si" if in_si => {
                            strings.push(decode_excel_escapes(&current));
                            current.clear();
                            in_si = false;
                        }
                        b"rPh" if phonetic_depth > 0 => phonetic_depth -= 1,
                        b"t" => in_t = false,
                        _ => {}
                    }
                }
                Ok(Event::Text(e)) if in_t => {
                    let text = e.unescape().map_err(|err| XlsxError::xml(part, err))?;
                    current.push_str(&text);
                }
                Ok(Event::CData(e)) if in_t => {
                    let text = std::str::from_utf8(&e).map_err(|err| XlsxError::xml(part, err))?;
                    current.push_str(text);
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

        log::debug!("Read {} shared strings from {part}", strings.len());
        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// Resolve a raw cell value (a decimal index) to its string.
    ///
    /// A value that is not an index, or an index past the end of the table,
    /// means the package is corrupt and is reported as an error.
    pub fn resolve(&self, raw: &str) -> XlsxResult<&str> {
        let index: usize = raw
            .trim()
            .parse()
            .map_err(|_| XlsxError::InvalidSharedStringIndex(raw.to_string()))?;

        self.get(index).ok_or(XlsxError::SharedStringOutOfRange {
            index,
            len: self.strings.len(),
        })
    }

    /// Number of strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl From<Vec<String>> for SharedStringTable {
    fn from(strings: Vec<String>) -> Self {
        Self { strings }
    }
}

//! Common utilities for E2E tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// SpreadsheetML main namespace
pub const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

/// A package written to a temp directory; removed on drop.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write a package made of the given parts to `<tempdir>/book.xlsx`.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = write_package(&[("xl/worksheets/sheet1.xml", &sheet_xml(""))]);
/// let table = XlsxExtractor::extract_file(&fixture.path).unwrap();
/// ```
pub fn write_package(parts: &[(&str, &str)]) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("book.xlsx");
    let file = std::fs::File::create(&path).expect("create package file");

    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in parts {
        zip.start_file(*name, options).expect("start part");
        zip.write_all(content.as_bytes()).expect("write part");
    }
    zip.finish().expect("finish package");

    Fixture { _dir: dir, path }
}

/// Shared-strings part holding `items` in order
pub fn shared_strings_xml(items: &[&str]) -> String {
    let body: String = items
        .iter()
        .map(|s| format!("<si><t xml:space=\"preserve\">{}</t></si>", escape(s)))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="{MAIN_NS}" count="{n}" uniqueCount="{n}">{body}</sst>"#,
        n = items.len()
    )
}

/// Worksheet part with the given `<row>` markup inside `sheetData`
pub fn sheet_xml(rows: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{MAIN_NS}"><sheetData>{rows}</sheetData></worksheet>"#
    )
}

/// One `<row>` of shared-string cells referencing `indices`
pub fn shared_row(row: u32, indices: &[usize]) -> String {
    let cells: String = indices
        .iter()
        .enumerate()
        .map(|(col, idx)| {
            format!(
                r#"<c r="{}{row}" t="s"><v>{idx}</v></c>"#,
                (b'A' + col as u8) as char
            )
        })
        .collect();
    format!(r#"<row r="{row}">{cells}</row>"#)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

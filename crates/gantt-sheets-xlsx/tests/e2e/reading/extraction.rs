//! Extraction contract: ordering, shared-string resolution and failures.

use crate::{shared_row, shared_strings_xml, sheet_xml, write_package};
use gantt_sheets_xlsx::{ExtractOptions, XlsxError, XlsxExtractor};
use pretty_assertions::assert_eq;

#[test]
fn test_minimal_package() {
    let fixture = write_package(&[
        (
            "xl/sharedStrings.xml",
            &shared_strings_xml(&["Task A", "01-Jan-2026", "15-Jan-2026"]),
        ),
        ("xl/worksheets/sheet1.xml", &sheet_xml(&shared_row(1, &[0, 1, 2]))),
    ]);

    let table = XlsxExtractor::extract_file(&fixture.path).expect("extract");

    assert_eq!(
        table.into_rows(),
        vec![vec![
            "Task A".to_string(),
            "01-Jan-2026".to_string(),
            "15-Jan-2026".to_string()
        ]]
    );
}

#[test]
fn test_shared_index_resolves_in_document_order() {
    let items = ["zero", "one", "two", "three", "four"];
    let fixture = write_package(&[
        ("xl/sharedStrings.xml", &shared_strings_xml(&items)),
        (
            "xl/worksheets/sheet1.xml",
            &sheet_xml(&format!("{}{}", shared_row(1, &[4, 0, 2]), shared_row(2, &[3, 3]))),
        ),
    ]);

    let table = XlsxExtractor::extract_file(&fixture.path).expect("extract");

    assert_eq!(table.cell(0, 0), Some("four"));
    assert_eq!(table.cell(0, 1), Some("zero"));
    assert_eq!(table.cell(0, 2), Some("two"));
    assert_eq!(table.row(1).map(Vec::len), Some(2));
    assert_eq!(table.cell(1, 1), Some("three"));
}

#[test]
fn test_fields_with_delimiters_survive() {
    let fixture = write_package(&[
        (
            "xl/sharedStrings.xml",
            &shared_strings_xml(&["Plan, review & \"sign\"", "line 1\nline 2"]),
        ),
        ("xl/worksheets/sheet1.xml", &sheet_xml(&shared_row(1, &[0, 1]))),
    ]);

    let table = XlsxExtractor::extract_file(&fixture.path).expect("extract");
    assert_eq!(table.cell(0, 0), Some("Plan, review & \"sign\""));
    assert_eq!(table.cell(0, 1), Some("line 1\nline 2"));
}

#[test]
fn test_out_of_range_index_fails() {
    let fixture = write_package(&[
        ("xl/sharedStrings.xml", &shared_strings_xml(&["only"])),
        ("xl/worksheets/sheet1.xml", &sheet_xml(&shared_row(1, &[0, 1]))),
    ]);

    let err = XlsxExtractor::extract_file(&fixture.path).unwrap_err();
    assert!(matches!(
        err,
        XlsxError::SharedStringOutOfRange { index: 1, len: 1 }
    ));
}

#[test]
fn test_missing_worksheet_names_the_part() {
    let fixture = write_package(&[("xl/sharedStrings.xml", &shared_strings_xml(&["Task A"]))]);

    let err = XlsxExtractor::extract_file(&fixture.path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required part: xl/worksheets/sheet1.xml"
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.xlsx");

    let err = XlsxExtractor::extract_file(&path).unwrap_err();
    assert!(matches!(err, XlsxError::Open { .. }));
    assert!(err.to_string().contains("nope.xlsx"));
}

#[test]
fn test_file_that_is_not_a_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.xlsx");
    std::fs::write(&path, "Name,Start,End\r\n").unwrap();

    let err = XlsxExtractor::extract_file(&path).unwrap_err();
    assert!(matches!(err, XlsxError::Zip(_)));
}

#[test]
fn test_extraction_is_repeatable() {
    let fixture = write_package(&[
        ("xl/sharedStrings.xml", &shared_strings_xml(&["a", "b"])),
        ("xl/worksheets/sheet1.xml", &sheet_xml(&shared_row(1, &[1, 0]))),
    ]);

    let first = XlsxExtractor::extract_file(&fixture.path).unwrap();
    let second = XlsxExtractor::extract_file(&fixture.path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_other_worksheet_part() {
    let fixture = write_package(&[
        ("xl/sharedStrings.xml", &shared_strings_xml(&["first", "second"])),
        ("xl/worksheets/sheet1.xml", &sheet_xml(&shared_row(1, &[0]))),
        ("xl/worksheets/sheet2.xml", &sheet_xml(&shared_row(1, &[1]))),
    ]);

    let options = ExtractOptions::default().with_worksheet_part("xl/worksheets/sheet2.xml");
    let table = XlsxExtractor::extract_file_with_options(&fixture.path, &options).expect("extract");
    assert_eq!(table.cell(0, 0), Some("second"));

    let options = ExtractOptions::default().with_worksheet_part("xl/worksheets/sheet3.xml");
    let err = XlsxExtractor::extract_file_with_options(&fixture.path, &options).unwrap_err();
    assert!(matches!(err, XlsxError::MissingPart(ref part) if part == "xl/worksheets/sheet3.xml"));
}

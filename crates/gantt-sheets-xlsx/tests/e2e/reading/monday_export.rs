//! A package shaped like a Monday.com board export: a title row, a header,
//! group separators, French dates, and a styles part that strict readers reject.

use crate::{shared_strings_xml, sheet_xml, write_package};
use gantt_sheets_xlsx::XlsxExtractor;
use pretty_assertions::assert_eq;

const BROKEN_STYLES: &str = r#"<?xml version="1.0"?><styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0" fontId="9" fillId="9" applyAlignment="maybe"><alignment horizontal="sideways"/></xf></cellXfs><dxfs count="1"><dxf><font><b val="x"/></font></dxf></dxfs></styleSheet>"#;

#[test]
fn test_monday_board_export() {
    let strings = shared_strings_xml(&[
        "Roadmap 2026",
        "Name",
        "Start",
        "End",
        "Phase 1",
        "Design",
        "05-janv.-2026",
        "27-févr.-2026",
        "Build",
        "02-mars-2026",
        "15-mai-2026",
    ]);
    let rows = concat!(
        r#"<row r="1" spans="1:3"><c r="A1" s="1" t="s"><v>0</v></c></row>"#,
        r#"<row r="3"><c r="A3" t="s"><v>4</v></c></row>"#,
        r#"<row r="4"><c r="A4" t="s"><v>1</v></c><c r="B4" t="s"><v>2</v></c><c r="C4" t="s"><v>3</v></c></row>"#,
        r#"<row r="5"><c r="A5" t="s"><v>5</v></c><c r="B5" t="s"><v>6</v></c><c r="C5" t="s"><v>7</v></c><c r="D5" s="1"/></row>"#,
        r#"<row r="6"><c r="A6" t="s"><v>8</v></c><c r="B6" t="s"><v>9</v></c><c r="C6" t="s"><v>10</v></c><c r="D6"><v>0.5</v></c></row>"#,
    );

    let fixture = write_package(&[
        ("[Content_Types].xml", "<Types/>"),
        ("xl/workbook.xml", "<workbook><sheets><sheet name=\"Roadmap\"/></sheets></workbook>"),
        ("xl/styles.xml", BROKEN_STYLES),
        ("xl/sharedStrings.xml", &strings),
        ("xl/worksheets/sheet1.xml", &sheet_xml(rows)),
    ]);

    let table = XlsxExtractor::extract_file(&fixture.path).expect("extract");
    let rows: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect();

    assert_eq!(
        rows,
        vec![
            vec!["Roadmap 2026"],
            vec!["Phase 1"],
            vec!["Name", "Start", "End"],
            vec!["Design", "05-janv.-2026", "27-févr.-2026", ""],
            vec!["Build", "02-mars-2026", "15-mai-2026", "0.5"],
        ]
    );
}

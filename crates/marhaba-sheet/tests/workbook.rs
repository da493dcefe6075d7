use std::path::PathBuf;

use marhaba_sheet::{read_rows, read_rows_from_bytes};
use marhaba_types::Row;

// Two worksheets: "Glossary" (read) and "Notes" (never read). Row 4 of the
// first sheet is left blank.
fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/glossary.xlsx")
}

fn first_sheet() -> Vec<Row> {
    vec![
        Row::new(Some("Greetings"), None, None).with_image(Some("img/greetings.png")),
        Row::new(Some("Hello"), Some("marhaba"), Some("مرحبا")),
        Row::new(Some("Numbers"), None, None),
        Row::new(Some("One"), Some("wahid"), Some("واحد")),
    ]
}

#[test]
fn reads_only_the_first_worksheet_from_a_file() {
    let rows = read_rows(&fixture()).unwrap();

    assert_eq!(rows, first_sheet());
    assert!(rows.iter().all(|row| row.english.as_deref() != Some("Ignored")));
}

#[test]
fn reads_only_the_first_worksheet_from_bytes() {
    let bytes = std::fs::read(fixture()).unwrap();

    let rows = read_rows_from_bytes(bytes).unwrap();

    assert_eq!(rows, first_sheet());
}

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use marhaba_types::Row;

use crate::error::SheetError;

const ENGLISH: &str = "English";
const PRONUNCIATION: &str = "Pronunciation";
const ARABIC: &str = "Arabic";
const IMAGE: &str = "Image";

/// Column positions resolved from the header row
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Columns {
    english: Option<usize>,
    pronunciation: Option<usize>,
    arabic: Option<usize>,
    image: Option<usize>,
}

impl Columns {
    fn from_header(header: &[Data]) -> Self {
        let mut columns = Columns::default();
        for (position, cell) in header.iter().enumerate() {
            let Data::String(name) = cell else { continue };
            let slot = match name.as_str() {
                ENGLISH => &mut columns.english,
                PRONUNCIATION => &mut columns.pronunciation,
                ARABIC => &mut columns.arabic,
                IMAGE => &mut columns.image,
                _ => continue,
            };
            // First matching header wins
            slot.get_or_insert(position);
        }

        for (name, column) in [
            (ENGLISH, columns.english),
            (PRONUNCIATION, columns.pronunciation),
            (ARABIC, columns.arabic),
        ] {
            if column.is_none() {
                tracing::warn!("Column '{}' not found in header row", name);
            }
        }

        columns
    }
}

/// Blank-like cells read as absent: empty, empty text, zero, `false`, errors.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) if text.is_empty() => None,
        Data::String(text) => Some(text.clone()),
        Data::Int(0) | Data::Bool(false) => None,
        Data::Float(value) if *value == 0.0 || value.is_nan() => None,
        other => Some(other.to_string()),
    }
}

fn field(cells: &[Data], column: Option<usize>) -> Option<String> {
    column.and_then(|position| cells.get(position)).and_then(cell_text)
}

/// Turn a worksheet range into rows, using its first row as the header.
///
/// Rows with no present field are dropped, so gaps inside the used range
/// never reach the grouper.
pub fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        tracing::warn!("Worksheet is empty");
        return Vec::new();
    };
    let columns = Columns::from_header(header);

    rows.map(|cells| Row {
        english: field(cells, columns.english),
        pronunciation: field(cells, columns.pronunciation),
        arabic: field(cells, columns.arabic),
        image: field(cells, columns.image),
    })
    .filter(|row| *row != Row::default())
    .collect()
}

fn first_sheet_rows<RS>(workbook: &mut Sheets<RS>) -> Result<Vec<Row>, SheetError>
where
    RS: Read + Seek,
{
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoWorksheet)?;
    tracing::debug!("Reading worksheet '{}'", name);

    let range = workbook.worksheet_range(&name)?;
    let rows = rows_from_range(&range);
    tracing::info!("Read {} rows from worksheet '{}'", rows.len(), name);
    Ok(rows)
}

/// Read the first worksheet of a spreadsheet file
pub fn read_rows(path: &Path) -> Result<Vec<Row>, SheetError> {
    tracing::info!("Opening spreadsheet {}", path.display());
    let mut workbook = open_workbook_auto(path).map_err(|source| SheetError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    first_sheet_rows(&mut workbook)
}

/// Read the first worksheet of an in-memory spreadsheet
pub fn read_rows_from_bytes(bytes: Vec<u8>) -> Result<Vec<Row>, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    first_sheet_rows(&mut workbook)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    fn sheet(cells: &[&[Data]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    #[test]
    fn maps_columns_by_header_name() {
        let range = sheet(&[
            &[text("Arabic"), text("English"), text("Image"), text("Pronunciation")],
            &[Data::Empty, text("Greetings"), text("img/g.png"), Data::Empty],
            &[text("مرحبا"), text("Hello"), Data::Empty, text("marhaba")],
        ]);

        let rows = rows_from_range(&range);

        assert_eq!(
            rows,
            vec![
                Row::new(Some("Greetings"), None, None).with_image(Some("img/g.png")),
                Row::new(Some("Hello"), Some("marhaba"), Some("مرحبا")),
            ]
        );
    }

    #[test]
    fn falsy_cells_are_absent() {
        let range = sheet(&[
            &[text("English"), text("Pronunciation"), text("Arabic")],
            &[text(""), Data::Int(0), Data::Bool(false)],
            &[Data::Float(0.0), Data::Error(calamine::CellErrorType::NA), text("x")],
        ]);

        let rows = rows_from_range(&range);

        assert_eq!(rows, vec![Row::new(None, None, Some("x"))]);
    }

    #[test]
    fn blank_rows_are_dropped() {
        let range = sheet(&[
            &[text("English"), text("Pronunciation"), text("Arabic"), text("Image")],
            &[text("Greetings"), Data::Empty, Data::Empty, Data::Empty],
            &[Data::Empty, Data::Empty, Data::Empty, Data::Empty],
            &[text(""), Data::Int(0), Data::Empty, Data::Bool(false)],
            &[text("Hello"), text("marhaba"), text("مرحبا"), Data::Empty],
        ]);

        let rows = rows_from_range(&range);

        assert_eq!(
            rows,
            vec![
                Row::new(Some("Greetings"), None, None),
                Row::new(Some("Hello"), Some("marhaba"), Some("مرحبا")),
            ]
        );
    }

    #[test]
    fn image_only_row_is_kept() {
        let range = sheet(&[
            &[text("English"), text("Pronunciation"), text("Arabic"), text("Image")],
            &[Data::Empty, Data::Empty, Data::Empty, text("img/stray.png")],
        ]);

        let rows = rows_from_range(&range);

        assert_eq!(rows, vec![Row::default().with_image(Some("img/stray.png"))]);
    }

    #[test]
    fn numbers_become_text() {
        let range = sheet(&[
            &[text("English"), text("Pronunciation"), text("Arabic")],
            &[Data::Int(3), text("thalatha"), text("ثلاثة")],
            &[Data::Float(2.5), Data::Bool(true), text("x")],
        ]);

        let rows = rows_from_range(&range);

        assert_eq!(rows[0].english.as_deref(), Some("3"));
        assert_eq!(rows[1].english.as_deref(), Some("2.5"));
        assert_eq!(rows[1].pronunciation.as_deref(), Some("true"));
    }

    #[test]
    fn missing_column_leaves_field_empty() {
        let range = sheet(&[
            &[text("English"), text("Arabic")],
            &[text("Hello"), text("مرحبا")],
        ]);

        let rows = rows_from_range(&range);

        assert_eq!(rows, vec![Row::new(Some("Hello"), None, Some("مرحبا"))]);
    }

    #[test]
    fn header_only_sheet_has_no_rows() {
        let range = sheet(&[&[text("English"), text("Pronunciation"), text("Arabic")]]);
        assert!(rows_from_range(&range).is_empty());
    }

    #[test]
    fn empty_range_has_no_rows() {
        let range: Range<Data> = Range::empty();
        assert!(rows_from_range(&range).is_empty());
    }

    #[test]
    fn garbage_bytes_are_unreadable() {
        let result = read_rows_from_bytes(b"definitely not a spreadsheet".to_vec());
        assert!(matches!(result, Err(SheetError::InvalidWorkbook(_))));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let result = read_rows(Path::new("no/such/file.xlsx"));
        assert!(matches!(result, Err(SheetError::Unreadable { .. })));
    }
}

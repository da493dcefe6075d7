//! Reads the glossary spreadsheet into ordered rows.
//!
//! Only the first worksheet is read. Its first row holds the column headers
//! `English`, `Pronunciation`, `Arabic` and optionally `Image`.

pub mod error;
pub mod reader;

pub use error::SheetError;
pub use reader::{read_rows, read_rows_from_bytes, rows_from_range};

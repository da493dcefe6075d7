use thiserror::Error;

/// The spreadsheet could not be turned into rows
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Cannot read spreadsheet '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Cannot read spreadsheet: {0}")]
    InvalidWorkbook(#[from] calamine::Error),

    #[error("Spreadsheet has no worksheets")]
    NoWorksheet,
}

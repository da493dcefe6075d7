#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No topic at position {index} (dataset has {count})")]
    UnknownCategory { index: usize, count: usize },

    #[error("Import refused: incorrect password")]
    ImportRefused,

    #[error("Invalid interchange data: {0}")]
    Interchange(#[from] serde_json::Error),
}

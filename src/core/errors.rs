use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Folder not found at: {}", .0.display())]
    MissingFolder(PathBuf),

    #[error("Record {index} has no '{field}' field")]
    MissingField { field: &'static str, index: usize },
}

impl From<std::io::Error> for DeckError {
    fn from(error: std::io::Error) -> Self {
        DeckError::Io(Box::new(error))
    }
}

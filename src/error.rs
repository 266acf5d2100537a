use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Conflict between inclusion of extension '{extension}' and exclusion patterns {patterns:?}")]
    Conflict {
        extension: String,
        patterns: Vec<String>,
    },
    #[error("Overwrite of {} declined", .0.display())]
    OverwriteDeclined(PathBuf),
    #[error("Failed to read overwrite confirmation: {0}")]
    Prompt(#[source] std::io::Error),
}
impl TocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TocError::Io {
            path: path.into(),
            source,
        }
    }
}

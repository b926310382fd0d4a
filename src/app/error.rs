use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppcastError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse XML: {0}")]
    Parse(String),

    #[error("Unexpected error: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppcastError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppcastError::NotFound(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, AppcastError::Parse(_))
    }
}

pub type Result<T> = std::result::Result<T, AppcastError>;

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckstatError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("worker pool did not finish within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("worker pool error: {0}")]
    Pool(String),

    #[error("unsupported attribute: {attribute}\nsupported: {supported}")]
    UnsupportedAttribute {
        attribute: String,
        supported: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DeckstatError>;

impl DeckstatError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DeckstatError::Io {
            source,
            path: path.into(),
        }
    }

    /// Wraps a decode failure with the file it came from.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DeckstatError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

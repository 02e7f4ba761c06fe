//! Error types for Docshelf.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported media type: {0}. Only PDF and DOCX files are allowed.")]
    UnsupportedMediaType(String),

    #[error("The file is empty")]
    EmptyFile,

    #[error("Failed to extract text from the file. The file may be empty or unsupported.")]
    NoContent,

    #[error("Failed to extract text: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether the error is the caller's fault (a 400-class failure at the
    /// HTTP boundary) as opposed to an unexpected server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedMediaType(_)
                | Error::EmptyFile
                | Error::NoContent
                | Error::ExtractionFailed(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

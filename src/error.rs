//! Error types for the askpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for askpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting, rendering, or asking.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The input cannot be parsed as a valid PDF structure.
    #[error("Malformed PDF document: {0}")]
    MalformedDocument(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// The document parsed fine but no page yielded any text.
    #[error("No text could be extracted from the document")]
    NoExtractableText,

    /// The drawing surface for PDF output could not be initialized.
    #[error("Render error: {0}")]
    Render(String),

    /// The completion service request failed.
    #[error("Completion request failed: {0}")]
    Upstream(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::MalformedDocument(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::Render("page geometry is degenerate".to_string());
        assert_eq!(err.to_string(), "Render error: page geometry is degenerate");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_upstream_display() {
        let err = Error::Upstream("status 500".to_string());
        assert_eq!(err.to_string(), "Completion request failed: status 500");
    }
}

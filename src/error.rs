//! Error types for pdf-outline.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a document or writing results.
///
/// Style inference itself is infallible; every variant here originates in
/// the decoding layer or in output handling.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version string we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// A page's content stream could not be decoded into text runs.
    #[error("Failed to decode page {page}: {message}")]
    PageDecode {
        /// 1-based page number
        page: u32,
        /// Underlying cause
        message: String,
    },

    /// Error while serializing an extraction result.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error means the document could not be opened at all.
    pub fn is_open_error(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::PdfParse(_)
                | Error::Encrypted
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
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

        let err = Error::PageDecode {
            page: 3,
            message: "bad operator".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode page 3: bad operator");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_open_error());
    }

    #[test]
    fn test_page_decode_is_not_open_error() {
        let err = Error::PageDecode {
            page: 1,
            message: String::new(),
        };
        assert!(!err.is_open_error());
        assert!(!Error::Render("x".into()).is_open_error());
    }
}

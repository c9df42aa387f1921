//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur during data loading and parsing.
///
/// Every variant is fatal to the run: there is no partial-load fallback,
/// callers propagate straight up to `main`.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found at the expected path
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Row in a CSV file couldn't be parsed
    ///
    /// Carries the file name and the 1-based line the reader was on,
    /// or 0 when the reader reported no position.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },
}

impl DataLoadError {
    /// Convert a [`csv::Error`] into a load error for the given file.
    ///
    /// Underlying I/O failures stay I/O errors; everything else becomes
    /// a [`DataLoadError::ParseError`] with the reader's line position.
    pub(crate) fn from_csv(file: &str, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => DataLoadError::IoError(io_err),
            _ => DataLoadError::ParseError {
                file: file.to_string(),
                line,
                reason,
            },
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

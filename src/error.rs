//! Error types for the short-date library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the short-date library
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be parsed as a date (only raised under the reject policy)
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Time zone offset could not be parsed or is out of range
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// No files matched pattern
    #[error("No files found matching pattern: {0}")]
    NoFilesMatched(String),

    /// Error while formatting a specific line of batch input
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}
